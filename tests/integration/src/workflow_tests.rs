//! End-to-end tests driving a consumer through the `GitClient` contract
//!
//! `propose_change` stands in for the kind of automation that depends on the
//! contract: read a file, branch from the base head, write, open a pull
//! request. It only sees `&dyn GitClient`.

use pretty_assertions::assert_eq;
use scm_client::{Error, GitClient, PullRequest, PullRequestInput, Signature};
use scm_fake::{FakeClient, Operation, content_sha, logging};

const REPO: &str = "org/service";
const BASE: &str = "main";
const BRANCH: &str = "bump-image";
const PATH: &str = "deploy/values.yaml";
const HEAD: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

fn bot() -> Signature {
    Signature::new("Deploy Bot", "bot@example.com")
}

fn bump_input() -> PullRequestInput {
    PullRequestInput {
        title: format!("Update {PATH}"),
        body: "Automated image bump".to_string(),
        source: BRANCH.to_string(),
        target: BASE.to_string(),
    }
}

/// Rewrite `PATH` on a new branch and open a pull request, unless the
/// content is already up to date.
fn propose_change(client: &dyn GitClient, new_body: &[u8]) -> Result<Option<PullRequest>, Error> {
    let current = client.get_file(REPO, BASE, PATH)?;
    if current.data == new_body {
        tracing::info!(path = PATH, "already up to date");
        return Ok(None);
    }

    let head = client.get_branch_head(REPO, BASE)?;
    client.create_branch(REPO, BRANCH, &head)?;
    client.update_file(
        REPO,
        BRANCH,
        PATH,
        &format!("Update {PATH}"),
        &current.sha,
        &bot(),
        new_body,
    )?;
    client.create_pull_request(REPO, &bump_input()).map(Some)
}

fn seeded() -> FakeClient {
    logging::init();
    let fake = FakeClient::new();
    fake.add_file_contents(REPO, PATH, BASE, b"image: v1\n");
    fake.add_branch_head(REPO, BASE, HEAD);
    fake
}

#[test]
fn test_change_opens_pull_request() {
    let fake = seeded();

    let pr = propose_change(&fake, b"image: v2\n").unwrap().unwrap();

    assert_eq!(pr.number, 1);
    assert_eq!(pr.link, "https://example.com/pull-request/1");
    fake.assert_branch_created(REPO, BRANCH, HEAD);
    fake.assert_pull_request_created(REPO, &bump_input());
    assert_eq!(
        fake.updated_contents(REPO, PATH, BRANCH),
        Some(b"image: v2\n".to_vec())
    );
    // Seeded state is untouched by the write.
    assert_eq!(
        fake.get_file(REPO, BASE, PATH).unwrap().sha,
        content_sha(b"image: v1\n")
    );
}

#[test]
fn test_unchanged_content_takes_no_action() {
    let fake = seeded();

    let outcome = propose_change(&fake, b"image: v1\n").unwrap();

    assert_eq!(outcome, None);
    fake.assert_no_interactions();
}

#[test]
fn test_missing_file_stops_before_writing() {
    logging::init();
    let fake = FakeClient::new();
    fake.add_branch_head(REPO, BASE, HEAD);

    let err = propose_change(&fake, b"image: v2\n").unwrap_err();

    assert!(err.is_not_found());
    fake.assert_no_interactions();
}

#[test]
fn test_branch_outage_leaves_no_partial_writes() {
    let fake = seeded();
    fake.fail(Operation::CreateBranch, Error::backend("503 Service Unavailable"));

    let err = propose_change(&fake, b"image: v2\n").unwrap_err();

    assert_eq!(err, Error::backend("503 Service Unavailable"));
    fake.refute_branch_created(REPO, BRANCH, HEAD);
    fake.assert_no_interactions();
}

#[test]
fn test_pull_request_outage_after_write() {
    let fake = seeded();
    fake.fail(Operation::CreatePullRequest, Error::backend("rate limited"));

    let err = propose_change(&fake, b"image: v2\n").unwrap_err();

    assert_eq!(err, Error::backend("rate limited"));
    fake.assert_branch_created(REPO, BRANCH, HEAD);
    fake.assert_no_pull_requests_created();
    fake.refute_pull_request_created(REPO, &bump_input());
}

#[test]
fn test_repeated_runs_number_sequentially() {
    let fake = seeded();

    let first = propose_change(&fake, b"image: v2\n").unwrap().unwrap();
    let second = propose_change(&fake, b"image: v3\n").unwrap().unwrap();

    assert_eq!((first.number, second.number), (1, 2));
    // Same branch and base sha both times: recorded once.
    assert_eq!(fake.state().branch_count(), 1);
    assert_eq!(
        fake.updated_contents(REPO, PATH, BRANCH),
        Some(b"image: v3\n".to_vec())
    );
}
