//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use atrium_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atrium API",
        version = "0.1.0",
        description = "Administration API for a multi-tenant SaaS backend. Exposes paginated, searchable, filterable CRUD endpoints for users, organizations, teams, subscriptions, invoices, audit logs, and organization members."
    ),
    paths(
        // Users
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::get_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        // Organizations
        handlers::organizations::list_organizations,
        handlers::organizations::create_organization,
        handlers::organizations::get_organization,
        handlers::organizations::update_organization,
        handlers::organizations::delete_organization,
        // Teams
        handlers::teams::list_teams,
        handlers::teams::create_team,
        handlers::teams::get_team,
        handlers::teams::update_team,
        handlers::teams::delete_team,
        // Subscriptions
        handlers::subscriptions::list_subscriptions,
        handlers::subscriptions::create_subscription,
        handlers::subscriptions::get_subscription,
        handlers::subscriptions::update_subscription,
        handlers::subscriptions::delete_subscription,
        // Invoices
        handlers::invoices::list_invoices,
        handlers::invoices::create_invoice,
        handlers::invoices::get_invoice,
        handlers::invoices::update_invoice,
        handlers::invoices::delete_invoice,
        // Audit logs (append-only, no update)
        handlers::audit_logs::list_audit_logs,
        handlers::audit_logs::create_audit_log,
        handlers::audit_logs::get_audit_log,
        handlers::audit_logs::delete_audit_log,
        // Organization members
        handlers::org_members::list_organization_members,
        handlers::org_members::create_organization_member,
        handlers::org_members::get_organization_member,
        handlers::org_members::update_organization_member,
        handlers::org_members::delete_organization_member,
        // Health
        handlers::health::health_check,
    ),
    components(
        schemas(
            // Entities
            models::User,
            models::UserRole,
            models::UserStatus,
            models::Organization,
            models::OrganizationPlan,
            models::OrganizationStatus,
            models::Team,
            models::TeamLead,
            models::TeamWithLead,
            models::Subscription,
            models::SubscriptionStatus,
            models::Invoice,
            models::InvoiceStatus,
            models::AuditLog,
            models::AuditStatus,
            models::AuditSeverity,
            models::OrganizationMember,
            // Request bodies
            models::CreateUserRequest,
            models::UpdateUserRequest,
            models::CreateOrganizationRequest,
            models::UpdateOrganizationRequest,
            models::CreateTeamRequest,
            models::UpdateTeamRequest,
            models::TeamLeadInput,
            models::CreateSubscriptionRequest,
            models::UpdateSubscriptionRequest,
            models::CreateInvoiceRequest,
            models::UpdateInvoiceRequest,
            models::CreateAuditLogRequest,
            models::CreateOrganizationMemberRequest,
            models::UpdateOrganizationMemberRequest,
            // Error
            error::ErrorResponse,
            error::FieldError,
        )
    ),
    tags(
        (name = "users", description = "User account management"),
        (name = "organizations", description = "Tenant organization management"),
        (name = "teams", description = "Team management with embedded team leads"),
        (name = "subscriptions", description = "Subscription plan management"),
        (name = "invoices", description = "Billing invoice management"),
        (name = "audit-logs", description = "Append-only audit trail"),
        (name = "organization-members", description = "Organization membership rosters"),
        (name = "health", description = "Service health checks")
    )
)]
pub struct ApiDoc;
