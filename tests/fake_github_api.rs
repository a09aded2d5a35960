//! Exercises the fake through an unmodified Octocrab client.

mod support;

use fake_github::{CombinedStatus, IssueComment, Label, PullRequest, RepoStatus, User};
use http::StatusCode;
use octocrab::models::IssueState;
use serde_json::{Value, json};

use support::{OWNER, PR_NUMBER, REPO, repo_path, start, status_of};

fn sample_pull_request() -> PullRequest {
    serde_json::from_value(json!({
        "id": 101,
        "number": PR_NUMBER,
        "title": "Add pull request resource",
        "state": "open",
        "html_url": "https://github.com/tektoncd/test/pull/1",
        "body": "Tests all the things!",
        "user": { "login": "octocat" },
        "head": {
            "ref": "feature",
            "sha": "tacocat",
            "repo": { "name": REPO, "owner": { "login": OWNER } }
        },
        "base": {
            "ref": "main",
            "sha": "racecar",
            "repo": {
                "name": REPO,
                "owner": { "login": OWNER },
                "clone_url": "https://github.com/tektoncd/test.git"
            }
        }
    }))
    .expect("sample pull request should deserialise")
}

fn api_user(login: &str, id: u64) -> Value {
    let api = format!("https://api.github.com/users/{login}");
    json!({
        "login": login,
        "id": id,
        "node_id": format!("MDQ6VXNlcj{id}"),
        "avatar_url": format!("https://avatars.githubusercontent.com/u/{id}"),
        "gravatar_id": "",
        "url": api,
        "html_url": format!("https://github.com/{login}"),
        "followers_url": format!("{api}/followers"),
        "following_url": format!("{api}/following"),
        "gists_url": format!("{api}/gists"),
        "starred_url": format!("{api}/starred"),
        "subscriptions_url": format!("{api}/subscriptions"),
        "organizations_url": format!("{api}/orgs"),
        "repos_url": format!("{api}/repos"),
        "events_url": format!("{api}/events"),
        "received_events_url": format!("{api}/received_events"),
        "type": "User",
        "site_admin": false
    })
}

/// Pull request shaped like GitHub's own response, head fork deleted.
fn api_pull_request() -> PullRequest {
    serde_json::from_value(json!({
        "url": format!("https://api.github.com/repos/{OWNER}/{REPO}/pulls/{PR_NUMBER}"),
        "id": 101,
        "node_id": "PR_kwDOABCD",
        "html_url": format!("https://github.com/{OWNER}/{REPO}/pull/{PR_NUMBER}"),
        "number": PR_NUMBER,
        "state": "open",
        "locked": false,
        "title": "Add pull request resource",
        "user": api_user("octocat", 1),
        "body": "Tests all the things!",
        "labels": [],
        "created_at": "2019-01-01T00:00:00Z",
        "updated_at": "2019-01-02T00:00:00Z",
        "head": {
            "label": "octocat:feature",
            "ref": "feature",
            "sha": "tacocat",
            "user": api_user("octocat", 1),
            "repo": null
        },
        "base": {
            "label": format!("{OWNER}:main"),
            "ref": "main",
            "sha": "racecar",
            "user": api_user(OWNER, 2),
            "repo": {
                "id": 7,
                "node_id": "R_kgDOABCD",
                "name": REPO,
                "full_name": format!("{OWNER}/{REPO}"),
                "url": format!("https://api.github.com/repos/{OWNER}/{REPO}"),
                "owner": api_user(OWNER, 2)
            }
        }
    }))
    .expect("API-shaped pull request should deserialise")
}

fn label_names(labels: &[Label]) -> Vec<&str> {
    labels.iter().map(|label| label.name.as_str()).collect()
}

#[tokio::test]
async fn pull_request_is_not_found_until_added() {
    let fixture = start().await.expect("fake should start");
    let path = repo_path(&format!("pulls/{PR_NUMBER}"));

    let missing = fixture
        .client
        .get::<PullRequest, _, ()>(&path, None)
        .await
        .expect_err("unknown pull request should fail");
    assert_eq!(status_of(&missing), Some(StatusCode::NOT_FOUND));

    let pull_request = sample_pull_request();
    fixture.github.add_pull_request(pull_request.clone());

    let fetched: PullRequest = fixture
        .client
        .get(&path, None::<&()>)
        .await
        .expect("added pull request should be served");
    assert_eq!(fetched, pull_request);
}

#[tokio::test]
async fn octocrab_pull_request_model_reads_served_payload() {
    let fixture = start().await.expect("fake should start");
    let pulls = fixture.client.pulls(OWNER, REPO);

    let missing = pulls
        .get(PR_NUMBER)
        .await
        .expect_err("unknown pull request should fail");
    assert_eq!(status_of(&missing), Some(StatusCode::NOT_FOUND));

    fixture.github.add_pull_request(api_pull_request());

    let pull_request = pulls
        .get(PR_NUMBER)
        .await
        .expect("Octocrab should decode the served pull request");
    assert_eq!(pull_request.number, PR_NUMBER);
    assert_eq!(pull_request.title.as_deref(), Some("Add pull request resource"));
    assert_eq!(pull_request.state, Some(IssueState::Open));
    assert_eq!(pull_request.head.ref_field, "feature");
    assert!(pull_request.head.repo.is_none(), "deleted fork has no head repo");
    let base_repo = pull_request.base.repo.expect("base repo should decode");
    assert_eq!(base_repo.name, REPO);
    assert_eq!(
        base_repo.owner.map(|owner| owner.login).as_deref(),
        Some(OWNER)
    );
}

#[tokio::test]
async fn comments_are_listed_in_creation_order() {
    let fixture = start().await.expect("fake should start");
    let path = repo_path(&format!("issues/{PR_NUMBER}/comments"));

    let initial: Vec<IssueComment> = fixture
        .client
        .get(&path, None::<&()>)
        .await
        .expect("listing comments should succeed");
    assert!(initial.is_empty(), "expected no comments, got {initial:?}");

    let first = IssueComment::with_body("hello world!");
    let second = IssueComment {
        user: Some(User::new("reviewer")),
        ..IssueComment::with_body("second thoughts")
    };

    let created: IssueComment = fixture
        .client
        .post(&path, Some(&first))
        .await
        .expect("creating comment should succeed");
    assert_eq!(created, first);

    let listed: Vec<IssueComment> = fixture
        .client
        .get(&path, None::<&()>)
        .await
        .expect("listing comments should succeed");
    assert_eq!(listed, vec![first.clone()]);

    let created_second: IssueComment = fixture
        .client
        .post(&path, Some(&second))
        .await
        .expect("creating second comment should succeed");
    assert_eq!(created_second, second);

    let listed_again: Vec<IssueComment> = fixture
        .client
        .get(&path, None::<&()>)
        .await
        .expect("listing comments should succeed");
    assert_eq!(listed_again, vec![first, second.clone()]);
    assert_eq!(
        fixture.github.comments(OWNER, REPO, PR_NUMBER).last(),
        Some(&second)
    );
}

#[tokio::test]
async fn combined_status_tracks_created_statuses() {
    let fixture = start().await.expect("fake should start");
    let sha = "tacocat";
    let combined_path = repo_path(&format!("commits/{sha}/status"));

    let initial: CombinedStatus = fixture
        .client
        .get(&combined_path, None::<&()>)
        .await
        .expect("combined status should succeed for unknown sha");
    assert_eq!(initial, CombinedStatus::default());

    let status = RepoStatus {
        context: Some("Tekton".to_owned()),
        description: Some("Test all the things!".to_owned()),
        state: Some("success".to_owned()),
        target_url: Some("https://tekton.dev".to_owned()),
        ..RepoStatus::default()
    };
    let created: RepoStatus = fixture
        .client
        .post(repo_path(&format!("statuses/{sha}")), Some(&status))
        .await
        .expect("creating status should succeed");
    assert_eq!(created, status);

    let combined: CombinedStatus = fixture
        .client
        .get(&combined_path, None::<&()>)
        .await
        .expect("combined status should succeed");
    assert_eq!(
        combined,
        CombinedStatus {
            total_count: 1,
            statuses: vec![status],
        }
    );
}

#[tokio::test]
async fn labels_are_added_then_replaced() {
    let fixture = start().await.expect("fake should start");
    fixture.github.add_pull_request(sample_pull_request());
    let path = repo_path(&format!("issues/{PR_NUMBER}/labels"));

    let initial: Vec<Label> = fixture
        .client
        .get(&path, None::<&()>)
        .await
        .expect("listing labels should succeed");
    assert!(initial.is_empty(), "expected no labels, got {initial:?}");

    let steps: [(&str, Vec<&str>, Vec<&str>); 4] = [
        ("add", vec!["a"], vec!["a"]),
        ("add", vec!["b"], vec!["a", "b"]),
        ("add", vec!["a"], vec!["a", "b"]),
        ("replace", vec!["c"], vec!["c"]),
    ];

    for (operation, names, expected) in steps {
        let response: Result<Vec<Label>, octocrab::Error> = if operation == "add" {
            fixture.client.post(&path, Some(&names)).await
        } else {
            fixture.client.put(&path, Some(&names)).await
        };
        let updated = response.expect("label update should succeed");
        assert_eq!(label_names(&updated), expected, "{operation} {names:?}");

        let listed: Vec<Label> = fixture
            .client
            .get(&path, None::<&()>)
            .await
            .expect("listing labels should succeed");
        assert_eq!(
            label_names(&listed),
            expected,
            "list after {operation} {names:?}"
        );
    }
}

#[tokio::test]
async fn each_fake_has_its_own_state() {
    let first = start().await.expect("first fake should start");
    let second = start().await.expect("second fake should start");
    first.github.add_pull_request(sample_pull_request());
    let path = repo_path(&format!("pulls/{PR_NUMBER}"));

    let found: PullRequest = first
        .client
        .get(&path, None::<&()>)
        .await
        .expect("first fake should serve its pull request");
    assert_eq!(found.number, PR_NUMBER);

    let missing = second
        .client
        .get::<PullRequest, _, ()>(&path, None)
        .await
        .expect_err("second fake should not see the first fake's state");
    assert_eq!(status_of(&missing), Some(StatusCode::NOT_FOUND));
    assert_ne!(first.server.address(), second.server.address());
}
