//! Database repositories for the data-access layer.
//!
//! One repository per entity; each is the only code path permitted to read
//! or write that entity's table. The structurally identical plumbing
//! (filtered paging, fetch/delete by id, dynamic partial updates) lives in
//! [crud]; repositories contribute their table metadata, filter sets,
//! inserts, and computed defaults.

pub mod audit_log;
pub mod crud;
pub mod invoice;
pub mod org_member;
pub mod organization;
pub mod subscription;
pub mod team;
pub mod transaction;
pub mod user;

pub use audit_log::AuditLogRepository;
pub use invoice::InvoiceRepository;
pub use org_member::OrganizationMemberRepository;
pub use organization::OrganizationRepository;
pub use subscription::SubscriptionRepository;
pub use team::TeamRepository;
pub use user::UserRepository;
