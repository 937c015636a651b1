//! Seeds the database with demo data.
//!
//! Clears all tables and re-inserts a fixed dataset, so it is safe to run
//! repeatedly. Run with `cargo run --bin seed`.

use anyhow::Result;
use atrium_core::Config;
use sqlx::SqlitePool;

const AVATARS: [&str; 6] = [
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    atrium_api::setup::init_tracing();

    let config = Config::from_env()?;
    let pool = atrium_api::setup::database::setup_database(&config).await?;

    tracing::info!("Seeding database...");

    clear_tables(&pool).await?;
    seed_organizations(&pool).await?;
    seed_users(&pool).await?;
    seed_teams(&pool).await?;
    seed_subscriptions(&pool).await?;
    seed_invoices(&pool).await?;
    seed_audit_logs(&pool).await?;
    seed_organization_members(&pool).await?;

    tracing::info!("Database seeded successfully");
    Ok(())
}

/// Children first so foreign keys hold during the wipe.
async fn clear_tables(pool: &SqlitePool) -> Result<()> {
    for table in [
        "organization_members",
        "audit_logs",
        "invoices",
        "subscriptions",
        "team_leads",
        "teams",
        "users",
        "organizations",
    ] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(pool)
            .await?;
    }
    tracing::info!("Cleared existing data");
    Ok(())
}

async fn seed_organizations(pool: &SqlitePool) -> Result<()> {
    let rows = [
        ("1", "Acme Inc.", "acme.com", "Enterprise", 42, "Active", "Jan 15, 2023"),
        ("2", "Globex Corp", "globex.com", "Business", 18, "Active", "Mar 22, 2023"),
        ("3", "Soylent Corp", "soylent.com", "Business", 7, "Inactive", "Apr 10, 2023"),
        ("4", "Initech", "initech.com", "Enterprise", 31, "Active", "Feb 8, 2023"),
        ("5", "Umbrella Corp", "umbrella.com", "Starter", 5, "Active", "May 19, 2023"),
        ("6", "Massive Dynamic", "massive.com", "Business", 24, "Active", "Jun 3, 2023"),
        ("7", "Wayne Enterprises", "wayne.com", "Enterprise", 56, "Active", "Jan 5, 2023"),
    ];
    for (id, name, domain, plan, users, status, created_at) in rows {
        sqlx::query(
            "INSERT INTO organizations (id, name, domain, plan, users, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(domain)
        .bind(plan)
        .bind(users)
        .bind(status)
        .bind(created_at)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = rows.len(), "Inserted organizations");
    Ok(())
}

async fn seed_users(pool: &SqlitePool) -> Result<()> {
    let rows = [
        ("1", "John Doe", "john@acme.com", "Admin", "Acme Inc.", "Active", "2 hours ago", AVATARS[0]),
        ("2", "Sarah Davis", "sarah@globex.com", "Manager", "Globex Corp", "Active", "5 hours ago", AVATARS[1]),
        ("3", "Michael Robinson", "michael@soylent.com", "User", "Soylent Corp", "Inactive", "2 days ago", AVATARS[2]),
        ("4", "Alicia Johnson", "alicia@initech.com", "Admin", "Initech", "Active", "Just now", AVATARS[3]),
        ("5", "David Wilson", "david@umbrella.com", "User", "Umbrella Corp", "Active", "1 day ago", AVATARS[4]),
        ("6", "Emily Chen", "emily@massive.com", "Manager", "Massive Dynamic", "Active", "3 hours ago", AVATARS[5]),
        ("7", "Robert Smith", "robert@wayne.com", "User", "Wayne Enterprises", "Suspended", "1 week ago", AVATARS[0]),
    ];
    for (id, name, email, role, organization, status, last_active, avatar) in rows {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, role, organization, status, last_active, avatar, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(role)
        .bind(organization)
        .bind(status)
        .bind(last_active)
        .bind(avatar)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(pool)
        .await?;
    }
    tracing::info!(count = rows.len(), "Inserted users");
    Ok(())
}

async fn seed_teams(pool: &SqlitePool) -> Result<()> {
    let teams = [
        ("1", "Engineering", "Product development and engineering team", 12, "Jan 15, 2023"),
        ("2", "Marketing", "Brand, content, and growth marketing", 8, "Feb 3, 2023"),
        ("3", "Sales", "Enterprise sales and customer success", 15, "Jan 22, 2023"),
        ("4", "Product", "Product management and design", 7, "Mar 10, 2023"),
        ("5", "Finance", "Accounting and financial operations", 5, "Apr 5, 2023"),
        ("6", "Customer Support", "Technical support and customer service", 10, "Feb 18, 2023"),
    ];
    for (id, name, description, members, created_at) in teams {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, description, members, organization, lead_id, created_at)
            VALUES (?, ?, ?, ?, 'Acme Inc.', ?, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(members)
        .bind(id)
        .bind(created_at)
        .execute(pool)
        .await?;
    }

    let leads = [
        ("1", "John Doe", "john@acme.com"),
        ("2", "Sarah Davis", "sarah@acme.com"),
        ("3", "Michael Robinson", "michael@acme.com"),
        ("4", "Alicia Johnson", "alicia@acme.com"),
        ("5", "David Wilson", "david@acme.com"),
        ("6", "Emily Chen", "emily@acme.com"),
    ];
    for (i, (id, name, email)) in leads.iter().enumerate() {
        sqlx::query(
            "INSERT INTO team_leads (id, team_id, user_id, name, email, avatar) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(id)
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(AVATARS[i % AVATARS.len()])
        .execute(pool)
        .await?;
    }
    tracing::info!(count = teams.len(), "Inserted teams with leads");
    Ok(())
}

async fn seed_subscriptions(pool: &SqlitePool) -> Result<()> {
    let rows = [
        ("1", "Acme Inc.", "Enterprise", "Active", "$999.00", "Monthly", "Jul 15, 2023", "Visa ending in 4242"),
        ("2", "Globex Corp", "Business", "Active", "$499.00", "Monthly", "Jul 22, 2023", "Mastercard ending in 5555"),
        ("3", "Soylent Corp", "Business", "Past Due", "$499.00", "Monthly", "Jul 10, 2023", "Visa ending in 1234"),
        ("4", "Initech", "Enterprise", "Active", "$9,999.00", "Annually", "Jan 8, 2024", "American Express ending in 9876"),
        ("5", "Umbrella Corp", "Starter", "Active", "$99.00", "Monthly", "Jul 19, 2023", "Visa ending in 6789"),
        ("6", "Massive Dynamic", "Business", "Canceled", "$499.00", "Monthly", "N/A", "Mastercard ending in 4321"),
    ];
    for (id, organization, plan, status, amount, billing_cycle, next_billing, payment_method) in rows
    {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (id, organization, plan, status, amount, billing_cycle, next_billing, payment_method)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(organization)
        .bind(plan)
        .bind(status)
        .bind(amount)
        .bind(billing_cycle)
        .bind(next_billing)
        .bind(payment_method)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = rows.len(), "Inserted subscriptions");
    Ok(())
}

async fn seed_invoices(pool: &SqlitePool) -> Result<()> {
    let rows = [
        ("INV-001", "Acme Inc.", "$999.00", "Paid", "Jun 15, 2023"),
        ("INV-002", "Globex Corp", "$499.00", "Paid", "Jun 22, 2023"),
        ("INV-003", "Soylent Corp", "$499.00", "Unpaid", "Jun 10, 2023"),
        ("INV-004", "Acme Inc.", "$999.00", "Paid", "May 15, 2023"),
        ("INV-005", "Globex Corp", "$499.00", "Paid", "May 22, 2023"),
        ("INV-006", "Umbrella Corp", "$99.00", "Paid", "Jun 19, 2023"),
        ("INV-007", "Massive Dynamic", "$499.00", "Refunded", "Jun 3, 2023"),
    ];
    for (id, organization, amount, status, date) in rows {
        sqlx::query(
            "INSERT INTO invoices (id, organization, amount, status, date) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(organization)
        .bind(amount)
        .bind(status)
        .bind(date)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = rows.len(), "Inserted invoices");
    Ok(())
}

async fn seed_audit_logs(pool: &SqlitePool) -> Result<()> {
    let rows = [
        ("1", "1", "John Doe", "john@acme.com", AVATARS[0], "User Login", "Authentication", "192.168.1.1", "2023-07-15 09:23:45", "Success", "Info"),
        ("2", "2", "Sarah Davis", "sarah@globex.com", AVATARS[1], "Create User", "User Management", "192.168.1.2", "2023-07-15 10:15:22", "Success", "Info"),
        ("3", "3", "Michael Robinson", "michael@soylent.com", AVATARS[2], "Update Subscription", "Subscription Management", "192.168.1.3", "2023-07-15 11:05:17", "Success", "Info"),
        ("4", "4", "Alicia Johnson", "alicia@initech.com", AVATARS[3], "Failed Login Attempt", "Authentication", "192.168.1.4", "2023-07-15 12:45:33", "Failed", "Warning"),
        ("5", "5", "David Wilson", "david@umbrella.com", AVATARS[4], "Delete User", "User Management", "192.168.1.5", "2023-07-15 13:22:18", "Success", "Warning"),
        ("6", "6", "Emily Chen", "emily@massive.com", AVATARS[5], "API Key Created", "API Management", "192.168.1.6", "2023-07-15 14:10:05", "Success", "Info"),
        ("7", "0", "System", "system@atrium.dev", "", "Database Backup", "System", "192.168.1.7", "2023-07-15 15:00:00", "Success", "Info"),
        ("8", "7", "Robert Smith", "robert@wayne.com", AVATARS[0], "Unauthorized Access Attempt", "Organization Settings", "192.168.1.8", "2023-07-15 16:30:45", "Failed", "Critical"),
    ];
    for (id, user_id, user_name, user_email, user_avatar, action, resource, ip, timestamp, status, severity) in rows
    {
        sqlx::query(
            r#"
            INSERT INTO audit_logs (id, user_id, user_name, user_email, user_avatar, action, resource, ip_address, timestamp, status, severity)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(user_name)
        .bind(user_email)
        .bind(user_avatar)
        .bind(action)
        .bind(resource)
        .bind(ip)
        .bind(timestamp)
        .bind(status)
        .bind(severity)
        .execute(pool)
        .await?;
    }
    tracing::info!(count = rows.len(), "Inserted audit logs");
    Ok(())
}

async fn seed_organization_members(pool: &SqlitePool) -> Result<()> {
    let rows = [
        ("1", "John Doe", "john@acme.com", "Admin", "Engineering", "Active", "2 hours ago"),
        ("2", "Sarah Davis", "sarah@acme.com", "Manager", "Marketing", "Active", "5 hours ago"),
        ("3", "Michael Robinson", "michael@acme.com", "User", "Sales", "Inactive", "2 days ago"),
        ("4", "Alicia Johnson", "alicia@acme.com", "Admin", "Product", "Active", "Just now"),
        ("5", "David Wilson", "david@acme.com", "User", "Finance", "Active", "1 day ago"),
        ("6", "Emily Chen", "emily@acme.com", "Manager", "Customer Support", "Active", "3 hours ago"),
        ("7", "Robert Smith", "robert@acme.com", "User", "Engineering", "Suspended", "1 week ago"),
    ];
    for (i, (id, name, email, role, department, status, last_active)) in rows.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO organization_members (id, name, email, role, department, status, last_active, avatar, organization_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, '1')
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(role)
        .bind(department)
        .bind(status)
        .bind(last_active)
        .bind(AVATARS[i % AVATARS.len()])
        .execute(pool)
        .await?;
    }
    tracing::info!(count = rows.len(), "Inserted organization members");
    Ok(())
}
