//! Unit tests for the fake GitHub module.


use rstest::rstest;

use super::{FakeGitHub, IssueComment, Label, PullRequest};

#[rstest]
fn clones_share_state() {
    let github = FakeGitHub::new();
    let handle = github.clone();

    handle.add_pull_request(PullRequest::new("octo", "repo", 4));
    handle.add_comment("octo", "repo", 4, IssueComment::with_body("hi"));

    assert!(
        github.pull_request("octo", "repo", 4).is_some(),
        "pull request added through a clone should be visible"
    );
    assert_eq!(github.comments("octo", "repo", 4).len(), 1);
}

#[rstest]
fn separate_fakes_do_not_share_state() {
    let first = FakeGitHub::new();
    let second = FakeGitHub::new();

    first.add_labels("octo", "repo", 1, ["bug"]);

    assert_eq!(first.labels("octo", "repo", 1), vec![Label::new("bug")]);
    assert!(second.labels("octo", "repo", 1).is_empty());
}
