//! Teams own resources and scope what their members can see.

use serde::{Deserialize, Serialize};

use crate::client::{routes, IlertClient, Query};
use crate::errors::{required, Result};
use crate::resources::user::User;
use crate::types::Visibility;

api_enum! {
    pub enum TeamMemberRole {
        Admin => "ADMIN",
        User => "USER",
        Responder => "RESPONDER",
        Stakeholder => "STAKEHOLDER",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub user: User,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<TeamMemberRole>,
}

#[derive(Debug, Clone, Default)]
pub struct CreateTeamInput {
    pub team: Option<Team>,
}

#[derive(Debug, Clone)]
pub struct CreateTeamOutput {
    pub team: Team,
}

#[derive(Debug, Clone, Default)]
pub struct GetTeamsInput {
    pub start_index: Option<i64>,
    pub max_results: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetTeamsOutput {
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Default)]
pub struct GetTeamInput {
    pub team_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetTeamOutput {
    pub team: Team,
}

#[derive(Debug, Clone, Default)]
pub struct SearchTeamInput {
    pub team_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SearchTeamOutput {
    pub team: Team,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamInput {
    pub team_id: Option<i64>,
    pub team: Option<Team>,
}

#[derive(Debug, Clone)]
pub struct UpdateTeamOutput {
    pub team: Team,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteTeamInput {
    pub team_id: Option<i64>,
}

impl IlertClient {
    /// Create a team
    pub async fn create_team(&self, input: &CreateTeamInput) -> Result<CreateTeamOutput> {
        let team = required(input.team.as_ref(), "team")?;
        let url = self.url(&[&routes::TEAMS])?;
        let team = self.post_json(url, team).await?;
        Ok(CreateTeamOutput { team })
    }

    /// List teams
    pub async fn get_teams(&self, input: &GetTeamsInput) -> Result<GetTeamsOutput> {
        let url = self.url(&[&routes::TEAMS])?;
        let query = Query::new().paging(input.start_index, input.max_results);
        let teams = self.get_json(url, &query).await?;
        Ok(GetTeamsOutput { teams })
    }

    /// Get a team by id
    pub async fn get_team(&self, input: &GetTeamInput) -> Result<GetTeamOutput> {
        let id = required(input.team_id, "team id")?;
        let url = self.url(&[&routes::TEAMS, &id])?;
        let team = self.get_json(url, &Query::new()).await?;
        Ok(GetTeamOutput { team })
    }

    /// Find a team by exact name
    pub async fn search_team(&self, input: &SearchTeamInput) -> Result<SearchTeamOutput> {
        let name = required(input.team_name.as_deref(), "team name")?;
        let url = self.url(&[&routes::TEAMS, &routes::NAME, &name])?;
        let team = self.get_json(url, &Query::new()).await?;
        Ok(SearchTeamOutput { team })
    }

    /// Update a team
    pub async fn update_team(&self, input: &UpdateTeamInput) -> Result<UpdateTeamOutput> {
        let id = required(input.team_id, "team id")?;
        let team = required(input.team.as_ref(), "team")?;
        let url = self.url(&[&routes::TEAMS, &id])?;
        let team = self.put_json(url, team).await?;
        Ok(UpdateTeamOutput { team })
    }

    /// Delete a team
    pub async fn delete_team(&self, input: &DeleteTeamInput) -> Result<()> {
        let id = required(input.team_id, "team id")?;
        let url = self.url(&[&routes::TEAMS, &id])?;
        self.delete_resource(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_team_with_members() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/teams"))
            .and(body_partial_json(json!({
                "name": "Platform",
                "visibility": "PRIVATE",
                "members": [{"user": {"id": 1}, "role": "ADMIN"}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 5,
                "name": "Platform",
                "visibility": "PRIVATE",
                "members": [{"user": {"id": 1, "username": "jdoe"}, "role": "ADMIN"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let output = client
            .create_team(&CreateTeamInput {
                team: Some(Team {
                    name: "Platform".to_string(),
                    visibility: Some(Visibility::Private),
                    members: vec![TeamMember {
                        user: User::with_id(1),
                        role: Some(TeamMemberRole::Admin),
                    }],
                    ..Default::default()
                }),
            })
            .await
            .unwrap();

        let member = &output.team.members[0];
        assert_eq!(member.user.username.as_deref(), Some("jdoe"));
        assert_eq!(member.role, Some(TeamMemberRole::Admin));
    }

    #[tokio::test]
    async fn test_search_team_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams/name/Nobody"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "code": "NOT_FOUND",
                "message": ""
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = testing::client(&mock_server);
        let err = client
            .search_team(&SearchTeamInput {
                team_name: Some("Nobody".to_string()),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "wrong status code 404");
    }

    #[tokio::test]
    async fn test_update_team_requires_team() {
        let mock_server = MockServer::start().await;
        testing::expect_no_requests(&mock_server).await;

        let client = testing::client(&mock_server);
        let err = client
            .update_team(&UpdateTeamInput {
                team_id: Some(5),
                team: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "team is required");
    }
}
