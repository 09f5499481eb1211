use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use ghmetrics_core::model::{ContributionTotals, LanguageSize, ProfileCounts, RepositorySnapshot};
use ghmetrics_core::{ActivitySource, ContributionReport, DailyCount, RepositoryPage, ReportWindow};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";
const PAGE_SIZE: u32 = 100;
const LANGUAGES_PER_REPOSITORY: u32 = 10;

const PROFILE_QUERY: &str = r#"
query($login: String!, $from: DateTime!, $to: DateTime!, $longFrom: DateTime!) {
  user(login: $login) {
    followers { totalCount }
    following { totalCount }
    repositories(ownerAffiliations: OWNER, isFork: false) { totalCount }
    summary: contributionsCollection(from: $from, to: $to) {
      totalCommitContributions
      totalPullRequestContributions
      totalIssueContributions
      contributionCalendar { totalContributions }
    }
    calendar: contributionsCollection(from: $longFrom, to: $to) {
      contributionCalendar {
        weeks { contributionDays { date contributionCount } }
      }
    }
  }
}
"#;

const REPOSITORIES_QUERY: &str = r#"
query($login: String!, $after: String, $first: Int!, $languages: Int!) {
  user(login: $login) {
    repositories(first: $first, after: $after, ownerAffiliations: OWNER, isFork: false) {
      totalCount
      pageInfo { hasNextPage endCursor }
      nodes {
        stargazerCount
        languages(first: $languages, orderBy: {field: SIZE, direction: DESC}) {
          edges { size node { name } }
        }
      }
    }
  }
}
"#;

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct UserData<T> {
    user: Option<T>,
}

#[derive(Deserialize)]
struct TotalCount {
    #[serde(rename = "totalCount")]
    total_count: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileUser {
    followers: TotalCount,
    following: TotalCount,
    repositories: TotalCount,
    summary: SummaryCollection,
    calendar: CalendarCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryCollection {
    total_commit_contributions: u64,
    total_pull_request_contributions: u64,
    total_issue_contributions: u64,
    contribution_calendar: SummaryCalendar,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryCalendar {
    total_contributions: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarCollection {
    contribution_calendar: Calendar,
}

#[derive(Deserialize)]
struct Calendar {
    #[serde(default)]
    weeks: Vec<CalendarWeek>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarWeek {
    #[serde(default)]
    contribution_days: Vec<CalendarDay>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarDay {
    date: NaiveDate,
    #[serde(default)]
    contribution_count: u64,
}

#[derive(Deserialize)]
struct RepositoriesUser {
    repositories: RepositoryConnection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryConnection {
    total_count: Option<u64>,
    page_info: PageInfo,
    #[serde(default)]
    nodes: Vec<Option<RepositoryNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    #[serde(default)]
    stargazer_count: u64,
    languages: Option<LanguageConnection>,
}

#[derive(Deserialize)]
struct LanguageConnection {
    #[serde(default)]
    edges: Vec<LanguageEdge>,
}

#[derive(Deserialize)]
struct LanguageEdge {
    #[serde(default)]
    size: u64,
    node: Option<LanguageNode>,
}

#[derive(Deserialize)]
struct LanguageNode {
    name: Option<String>,
}

/// Reads a user's activity from the GitHub GraphQL API.
pub struct GitHubSource {
    client: Client,
    token: String,
    login: String,
    endpoint: String,
}

impl GitHubSource {
    pub fn new(login: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ghmetrics/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            client,
            token: token.to_string(),
            login: login.to_string(),
            endpoint: GRAPHQL_ENDPOINT.to_string(),
        })
    }

    fn query<T: DeserializeOwned>(&self, query: &str, variables: serde_json::Value) -> Result<T> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .context("sending GraphQL request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("GraphQL HTTP {}: {}", status, truncate(&body, 400));
        }

        let body: GraphQlResponse<T> = response.json().context("decoding GraphQL response")?;
        parse_response(body)
    }
}

fn parse_response<T>(body: GraphQlResponse<T>) -> Result<T> {
    if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        bail!("GraphQL errors: {}", messages.join("; "));
    }
    body.data.ok_or_else(|| anyhow!("GraphQL response carried no data"))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

impl ActivitySource for GitHubSource {
    fn contributions(&self, summary: &ReportWindow, long_days: u32) -> Result<ContributionReport> {
        let long = ReportWindow::ending(summary.to, long_days);
        let data: UserData<ProfileUser> = self.query(
            PROFILE_QUERY,
            json!({
                "login": self.login,
                "from": summary.from_utc().to_rfc3339(),
                "to": summary.to_utc().to_rfc3339(),
                "longFrom": long.from_utc().to_rfc3339(),
            }),
        )?;
        let user = data.user.ok_or_else(|| anyhow!("GitHub user '{}' not found", self.login))?;
        Ok(profile_report(&self.login, user))
    }

    fn repository_page(&self, cursor: Option<&str>) -> Result<RepositoryPage> {
        debug!("Requesting repositories after {:?}", cursor);
        let data: UserData<RepositoriesUser> = self.query(
            REPOSITORIES_QUERY,
            json!({
                "login": self.login,
                "after": cursor,
                "first": PAGE_SIZE,
                "languages": LANGUAGES_PER_REPOSITORY,
            }),
        )?;
        let user = data.user.ok_or_else(|| anyhow!("GitHub user '{}' not found", self.login))?;
        Ok(repository_page(user.repositories))
    }
}

fn profile_report(login: &str, user: ProfileUser) -> ContributionReport {
    let mut long_days: Vec<DailyCount> = user
        .calendar
        .contribution_calendar
        .weeks
        .into_iter()
        .flat_map(|w| w.contribution_days)
        .map(|d| DailyCount::new(d.date, d.contribution_count))
        .collect();
    long_days.sort_by_key(|d| d.date);

    let summary = user.summary;
    ContributionReport {
        login: login.to_string(),
        totals: ContributionTotals {
            contributions: summary.contribution_calendar.total_contributions,
            commits: summary.total_commit_contributions,
            pull_requests: summary.total_pull_request_contributions,
            issues: summary.total_issue_contributions,
        },
        profile: ProfileCounts {
            followers: Some(user.followers.total_count),
            following: Some(user.following.total_count),
            repositories: Some(user.repositories.total_count),
        },
        short_days: Vec::new(),
        long_days,
    }
}

fn repository_page(connection: RepositoryConnection) -> RepositoryPage {
    let repositories = connection
        .nodes
        .into_iter()
        .flatten()
        .map(|node| RepositorySnapshot {
            stars: node.stargazer_count,
            languages: node
                .languages
                .map(|l| l.edges)
                .unwrap_or_default()
                .into_iter()
                .map(|edge| LanguageSize {
                    name: edge.node.and_then(|n| n.name),
                    bytes: edge.size,
                })
                .collect(),
        })
        .collect();

    let next_cursor = if connection.page_info.has_next_page {
        connection.page_info.end_cursor
    } else {
        None
    };

    RepositoryPage {
        repositories,
        total_count: connection.total_count,
        next_cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_page_mapping() {
        let body: GraphQlResponse<UserData<RepositoriesUser>> = serde_json::from_str(
            r#"{
              "data": { "user": { "repositories": {
                "totalCount": 2,
                "pageInfo": { "hasNextPage": true, "endCursor": "Y3Vyc29y" },
                "nodes": [
                  { "stargazerCount": 5, "languages": { "edges": [
                      { "size": 1200, "node": { "name": "Rust" } },
                      { "size": 30, "node": null }
                  ] } },
                  null,
                  { "stargazerCount": 0, "languages": null }
                ]
              } } }
            }"#,
        )
        .unwrap();

        let user = parse_response(body).unwrap().user.unwrap();
        let page = repository_page(user.repositories);
        assert_eq!(page.total_count, Some(2));
        assert_eq!(page.next_cursor.as_deref(), Some("Y3Vyc29y"));
        assert_eq!(page.repositories.len(), 2);
        assert_eq!(page.repositories[0].stars, 5);
        assert_eq!(page.repositories[0].languages[0], LanguageSize::new("Rust", 1200));
        assert_eq!(page.repositories[0].languages[1].display_name(), "Other");
        assert!(page.repositories[1].languages.is_empty());
    }

    #[test]
    fn test_last_page_has_no_cursor() {
        let connection: RepositoryConnection = serde_json::from_str(
            r#"{ "totalCount": 1, "pageInfo": { "hasNextPage": false, "endCursor": "abc" }, "nodes": [] }"#,
        )
        .unwrap();
        assert_eq!(repository_page(connection).next_cursor, None);
    }

    #[test]
    fn test_profile_mapping_sorts_calendar() {
        let user: ProfileUser = serde_json::from_str(
            r#"{
              "followers": { "totalCount": 10 },
              "following": { "totalCount": 2 },
              "repositories": { "totalCount": 7 },
              "summary": {
                "totalCommitContributions": 40,
                "totalPullRequestContributions": 4,
                "totalIssueContributions": 1,
                "contributionCalendar": { "totalContributions": 45 }
              },
              "calendar": { "contributionCalendar": { "weeks": [
                { "contributionDays": [ { "date": "2025-06-29", "contributionCount": 3 } ] },
                { "contributionDays": [ { "date": "2025-06-28", "contributionCount": 0 } ] }
              ] } }
            }"#,
        )
        .unwrap();

        let report = profile_report("octocat", user);
        assert_eq!(report.totals.contributions, 45);
        assert_eq!(report.totals.issues, 1);
        assert_eq!(report.profile.followers, Some(10));
        let dates: Vec<String> = report.long_days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-06-28", "2025-06-29"]);
    }

    #[test]
    fn test_graphql_errors_surface() {
        let body: GraphQlResponse<UserData<RepositoriesUser>> =
            serde_json::from_str(r#"{ "data": null, "errors": [ { "message": "Bad credentials" } ] }"#).unwrap();
        let err = parse_response(body).err().unwrap();
        assert!(err.to_string().contains("Bad credentials"));
    }
}
