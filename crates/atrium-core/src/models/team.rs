use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Team entity. `organization` is a display name; `lead_id` points at the
/// paired [`TeamLead`] row, which lives and dies with the team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub members: i64,
    pub organization: String,
    pub lead_id: String,
    pub created_at: String,
}

/// Join-style record materializing a user as a team's lead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamLead {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Team as returned by the API: the team row with its lead joined in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamWithLead {
    #[serde(flatten)]
    pub team: Team,
    pub lead: Option<TeamLead>,
}

/// Lead details supplied when creating a team.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamLeadInput {
    #[validate(length(min = 1, message = "Team lead user is required"))]
    pub user_id: String,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Members must be a positive integer"))]
    pub members: i64,
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: String,
    #[validate(nested)]
    pub lead: TeamLeadInput,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Members must be a positive integer"))]
    pub members: Option<i64>,
    #[validate(length(min = 2, message = "Organization must be at least 2 characters"))]
    pub organization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_fields_are_validated_through_the_team_request() {
        let req = CreateTeamRequest {
            name: "Platform".to_string(),
            description: None,
            members: 5,
            organization: "Acme Inc.".to_string(),
            lead: TeamLeadInput {
                user_id: String::new(),
                name: "Jo".to_string(),
                email: "bad".to_string(),
                avatar: None,
            },
        };
        let errs = req.validate().unwrap_err();
        // Nested errors are reported under the `lead` key.
        assert!(errs.errors().contains_key("lead"));
    }

    #[test]
    fn team_with_lead_flattens_in_json() {
        let twl = TeamWithLead {
            team: Team {
                id: "t1".to_string(),
                name: "Platform".to_string(),
                description: None,
                members: 5,
                organization: "Acme Inc.".to_string(),
                lead_id: "l1".to_string(),
                created_at: "Jan 15, 2023".to_string(),
            },
            lead: None,
        };
        let json = serde_json::to_value(&twl).unwrap();
        assert_eq!(json["name"], "Platform");
        assert_eq!(json["leadId"], "l1");
        assert!(json["lead"].is_null());
    }
}
