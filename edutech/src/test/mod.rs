//! End-to-end API tests driven through an in-process test server.
