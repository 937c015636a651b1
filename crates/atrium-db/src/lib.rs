pub mod db;

pub use db::{
    AuditLogRepository, InvoiceRepository, OrganizationMemberRepository, OrganizationRepository,
    SubscriptionRepository, TeamRepository, UserRepository,
};
