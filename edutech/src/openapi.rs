//! OpenAPI documentation assembly.

use utoipa::OpenApi;

use crate::api::models::{
    Ack,
    auth::{LoginRequest, LoginResponse, SignupRequest},
    chat::{ChatRequest, ChatResponse},
    conversations::{
        ConversationCreateRequest, ConversationCreatedResponse, ConversationDeleteRequest, ConversationItem,
        ConversationListResponse,
    },
    dashboard::{DashboardStats, DashboardStatsResponse},
    messages::{MessageItem, MessageListResponse},
    recommendations::{RecommendationItem, RecommendationsResponse},
    study_sessions::{RecentSessionItem, RecentSessionsResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EduTech API",
        description = "Education platform backend: accounts, study dashboard, and an AI learning assistant."
    ),
    paths(
        crate::api::handlers::auth::signup,
        crate::api::handlers::auth::login,
        crate::api::handlers::dashboard::stats,
        crate::api::handlers::study_sessions::recent_sessions,
        crate::api::handlers::recommendations::list_recommendations,
        crate::api::handlers::chat::chatbot,
        crate::api::handlers::conversations::list_conversations,
        crate::api::handlers::conversations::create_conversation,
        crate::api::handlers::conversations::delete_conversation,
        crate::api::handlers::messages::list_messages,
    ),
    components(schemas(
        Ack,
        SignupRequest,
        LoginRequest,
        LoginResponse,
        DashboardStats,
        DashboardStatsResponse,
        RecentSessionItem,
        RecentSessionsResponse,
        RecommendationItem,
        RecommendationsResponse,
        ChatRequest,
        ChatResponse,
        ConversationCreateRequest,
        ConversationDeleteRequest,
        ConversationItem,
        ConversationListResponse,
        ConversationCreatedResponse,
        MessageItem,
        MessageListResponse,
    )),
    tags(
        (name = "auth", description = "Signup and stateless login"),
        (name = "dashboard", description = "Aggregate stats"),
        (name = "sessions", description = "Logged study sessions"),
        (name = "recommendations", description = "Canned study recommendations"),
        (name = "chat", description = "AI learning assistant"),
        (name = "conversations", description = "Chat history management"),
    )
)]
pub struct ApiDoc;
