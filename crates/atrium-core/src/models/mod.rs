//! Domain models and request DTOs.
//!
//! Each entity has a persisted struct plus a full `Create*` request and a
//! partial `Update*` request. Create requests carry the complete field
//! contract; update requests make every field optional while keeping the
//! same per-field constraints.

pub mod audit_log;
pub mod invoice;
pub mod org_member;
pub mod organization;
pub mod subscription;
pub mod team;
pub mod user;

pub use audit_log::{AuditLog, AuditSeverity, AuditStatus, CreateAuditLogRequest};
pub use invoice::{CreateInvoiceRequest, Invoice, InvoiceStatus, UpdateInvoiceRequest};
pub use org_member::{
    CreateOrganizationMemberRequest, OrganizationMember, UpdateOrganizationMemberRequest,
};
pub use organization::{
    CreateOrganizationRequest, Organization, OrganizationPlan, OrganizationStatus,
    UpdateOrganizationRequest,
};
pub use subscription::{
    CreateSubscriptionRequest, Subscription, SubscriptionStatus, UpdateSubscriptionRequest,
};
pub use team::{CreateTeamRequest, Team, TeamLead, TeamLeadInput, TeamWithLead, UpdateTeamRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserRole, UserStatus};
