//! The quiz application's route table.
//!
//! Paths are part of the public surface: bookmarks and links from outside the
//! application point at them, so they must not change.

use crate::routing::definition::RouteDefinition;

/// Every route of the quiz application, in declaration order.
pub fn quiz_routes() -> Vec<RouteDefinition> {
    vec![
        // Public
        RouteDefinition::view("/login", "Login").named("login"),
        RouteDefinition::view("/signup", "SignUp").named("signup"),
        // Admin
        RouteDefinition::view("/admin", "AdminDashboard").named("admin-dashboard"),
        RouteDefinition::view("/admin/subjects", "AdminSubjects").named("admin-subjects"),
        RouteDefinition::view("/admin/chapters", "AdminChapters").named("admin-chapters"),
        RouteDefinition::view("/admin/quizzes", "AdminQuizzes").named("admin-quizzes"),
        RouteDefinition::view("/admin/questions", "AdminQuestions").named("admin-questions"),
        RouteDefinition::view("/admin/users", "ManageUsers").named("admin-users"),
        // User
        RouteDefinition::view("/user/dashboard", "Dashboard").named("user-dashboard"),
        RouteDefinition::view("/user/subjects", "UserSubjects").named("user-subjects"),
        RouteDefinition::view("/user/chapters/:subject_id", "UserChapters")
            .named("user-chapters")
            .with_props(),
        RouteDefinition::view("/user/quizzes/:chapter_id", "UserQuizzes")
            .named("user-quizzes")
            .with_props(),
        RouteDefinition::view("/user/attempt/:quiz_id", "UserAttemptQuiz")
            .named("user-attempt")
            .with_props(),
        RouteDefinition::view("/user/scores", "UserScores").named("user-scores"),
        RouteDefinition::redirect("/", "/login"),
    ]
}
