//! End-to-end tests driving the client crate against a live server.

mod helpers;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::{self, Next};
use tokio::net::TcpListener;

use vendorhub_client::controller::DELETE_PROMPT;
use vendorhub_client::{
    ClientConfig, DeleteOutcome, LOGIN_REQUIRED_MESSAGE, SessionStore, VendorApiClient,
    VendorForm, VendorListController, confirm_and_delete,
};
use vendorhub_core::ErrorKind;
use vendorhub_core::types::id::VendorId;

use helpers::TestApp;

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";

struct LiveServer {
    app: TestApp,
    api: Arc<VendorApiClient>,
    list_requests: Arc<AtomicUsize>,
    sessions: SessionStore,
    _dir: tempfile::TempDir,
}

impl LiveServer {
    async fn start() -> Self {
        let app = TestApp::new();
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let list_requests = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&list_requests);
        let router = app.router.clone().layer(middleware::from_fn(
            move |req: Request, next: Next| {
                let counter = Arc::clone(&counter);
                async move {
                    if req.method() == Method::GET && req.uri().path() == "/api/vendors" {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                    next.run(req).await
                }
            },
        ));
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });

        let config = ClientConfig {
            api_base_url: format!("http://{addr}"),
            ..ClientConfig::default()
        };
        let api = Arc::new(VendorApiClient::new(&config).expect("client"));
        let dir = tempfile::tempdir().expect("tempdir");

        Self {
            app,
            api,
            list_requests,
            sessions: SessionStore::new(dir.path().join("session")),
            _dir: dir,
        }
    }

    fn login(&self, email: &str) -> vendorhub_client::Session {
        self.sessions
            .login(&self.app.token(email))
            .expect("login")
    }

    async fn seed(&self, email: &str, count: usize) -> Vec<VendorId> {
        let session = self.login(email);
        let mut ids = Vec::with_capacity(count);
        for i in 1..=count {
            let mut form = VendorForm::create();
            form.fields.name = format!("Vendor {i:02}");
            form.fields.account_no = format!("ACC-{i}");
            form.fields.bank_name = "First Bank".into();
            let vendor = form.submit(&self.api, Some(&session)).await.expect("create");
            ids.push(vendor.id);
        }
        ids
    }
}

#[tokio::test]
async fn test_session_round_trips_through_store() {
    let server = LiveServer::start().await;

    assert!(server.sessions.restore().expect("restore").is_none());

    let session = server.login(ALICE);
    assert_eq!(session.email(), ALICE);

    let restored = server.sessions.restore().expect("restore");
    assert_eq!(restored, Some(session));

    server.sessions.logout().expect("logout");
    assert!(server.sessions.restore().expect("restore").is_none());
}

#[tokio::test]
async fn test_form_submit_creates_and_edits() {
    let server = LiveServer::start().await;
    let session = server.login(ALICE);

    let mut form = VendorForm::create();
    form.fields.name = "  Acme  ".into();
    form.fields.account_no = "123".into();
    form.fields.bank_name = "First Bank".into();
    let created = form.submit(&server.api, Some(&session)).await.expect("create");
    assert_eq!(created.name, "Acme");
    assert_eq!(created.creator_email, ALICE);

    let mut edit = VendorForm::load(&server.api, Some(&session), created.id)
        .await
        .expect("load");
    assert_eq!(edit.title(), "Edit Vendor");
    edit.fields.city = Some("Springfield".into());
    let updated = edit.submit(&server.api, Some(&session)).await.expect("update");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.city.as_deref(), Some("Springfield"));
}

#[tokio::test]
async fn test_form_submit_without_session_sends_nothing() {
    let server = LiveServer::start().await;

    let mut form = VendorForm::create();
    form.fields.name = "Acme".into();
    form.fields.account_no = "123".into();
    form.fields.bank_name = "First Bank".into();
    let err = form.submit(&server.api, None).await.expect_err("needs session");

    assert_eq!(err.kind, ErrorKind::MissingToken);
    assert_eq!(err.message, LOGIN_REQUIRED_MESSAGE);
    assert_eq!(server.app.stored_count().await, 0);
}

#[tokio::test]
async fn test_form_edit_by_other_user_is_forbidden() {
    let server = LiveServer::start().await;
    let ids = server.seed(ALICE, 1).await;
    let bob = server.login(BOB);

    let mut form = VendorForm::load(&server.api, Some(&bob), ids[0])
        .await
        .expect("load");
    form.fields.name = "Hijacked".into();
    let err = form.submit(&server.api, Some(&bob)).await.expect_err("forbidden");

    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[tokio::test]
async fn test_list_controller_pages_and_gates_rows() {
    let server = LiveServer::start().await;
    server.seed(ALICE, 8).await;
    let bob = server.login(BOB);
    let bob_vendor = {
        let mut form = VendorForm::create();
        form.fields.name = "Bobs Bank Supplies".into();
        form.fields.account_no = "999".into();
        form.fields.bank_name = "Second Bank".into();
        form.submit(&server.api, Some(&bob)).await.expect("create")
    };

    let mut controller = VendorListController::new(Arc::clone(&server.api), 6);
    controller.navigate(1);
    controller.settle().await;

    let view = controller.view();
    assert_eq!(view.total(), 9);
    assert_eq!(view.rows().len(), 6);
    assert_eq!(view.total_pages(), 2);
    assert!(!view.has_previous());
    assert!(view.has_next());
    assert_eq!(view.summary(), "Showing 1 to 6 of 9 vendors");

    controller.next_page();
    controller.settle().await;
    let view = controller.view();
    assert_eq!(view.page(), 2);
    assert_eq!(view.summary(), "Showing 7 to 9 of 9 vendors");

    let rows = view.rows_for(bob.email());
    let editable: Vec<_> = rows.iter().filter(|r| r.can_edit).collect();
    assert_eq!(editable.len(), 1);
    assert_eq!(editable[0].vendor.id, bob_vendor.id);

    controller.set_search("bobs");
    let view = controller.view();
    assert_eq!(view.visible().len(), 1);
    assert_eq!(view.total(), 9);
}

#[tokio::test]
async fn test_delete_last_row_moves_back_a_page() {
    let server = LiveServer::start().await;
    let ids = server.seed(ALICE, 13).await;
    let session = server.login(ALICE);

    let mut controller = VendorListController::new(Arc::clone(&server.api), 6);
    controller.navigate(3);
    controller.settle().await;
    assert_eq!(controller.view().rows().len(), 1);

    let prompts = AtomicUsize::new(0);
    let confirm = |prompt: &str| {
        assert_eq!(prompt, DELETE_PROMPT);
        prompts.fetch_add(1, Ordering::SeqCst);
        true
    };
    let outcome = controller
        .delete(Some(&session), ids[12], &confirm)
        .await
        .expect("delete");
    controller.settle().await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(prompts.load(Ordering::SeqCst), 1);
    let view = controller.view();
    assert_eq!(view.page(), 2);
    assert_eq!(view.total(), 12);
    assert_eq!(view.rows().len(), 6);
    assert_eq!(server.app.stored_count().await, 12);
}

#[tokio::test]
async fn test_delete_cancelled_or_anonymous_keeps_record() {
    let server = LiveServer::start().await;
    let ids = server.seed(ALICE, 1).await;
    let session = server.login(ALICE);

    let mut controller = VendorListController::new(Arc::clone(&server.api), 6);
    controller.navigate(1);
    controller.settle().await;

    let decline = |_: &str| false;
    let outcome = controller
        .delete(Some(&session), ids[0], &decline)
        .await
        .expect("cancel");
    assert_eq!(outcome, DeleteOutcome::Cancelled);

    let accept = |_: &str| true;
    let err = controller
        .delete(None, ids[0], &accept)
        .await
        .expect_err("needs session");
    assert_eq!(err.message, LOGIN_REQUIRED_MESSAGE);

    assert_eq!(server.app.stored_count().await, 1);
}

#[tokio::test]
async fn test_delete_by_other_user_surfaces_forbidden() {
    let server = LiveServer::start().await;
    let ids = server.seed(ALICE, 1).await;
    let bob = server.login(BOB);

    let mut controller = VendorListController::new(Arc::clone(&server.api), 6);
    let accept = |_: &str| true;
    let err = controller
        .delete(Some(&bob), ids[0], &accept)
        .await
        .expect_err("forbidden");

    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(server.app.stored_count().await, 1);
}

#[tokio::test]
async fn test_unreachable_server_sets_view_error() {
    let config = ClientConfig {
        api_base_url: "http://127.0.0.1:9".into(),
        ..ClientConfig::default()
    };
    let api = Arc::new(VendorApiClient::new(&config).expect("client"));

    let mut controller = VendorListController::new(api, 6);
    controller.navigate(1);
    controller.settle().await;

    let view = controller.view();
    assert!(!view.is_loading());
    assert!(view.error().is_some());
    assert!(view.rows().is_empty());
}

#[tokio::test]
async fn test_standalone_delete_sends_no_list_fetch() {
    let server = LiveServer::start().await;
    let ids = server.seed(ALICE, 2).await;
    let session = server.login(ALICE);

    let accept = |_: &str| true;
    let outcome = confirm_and_delete(&server.api, Some(&session), ids[0], &accept)
        .await
        .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(server.app.stored_count().await, 1);
    assert_eq!(server.list_requests.load(Ordering::SeqCst), 0);

    let decline = |_: &str| false;
    let outcome = confirm_and_delete(&server.api, Some(&session), ids[1], &decline)
        .await
        .expect("cancel");
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(server.app.stored_count().await, 1);

    let err = confirm_and_delete(&server.api, None, ids[1], &accept)
        .await
        .expect_err("needs session");
    assert_eq!(err.kind, ErrorKind::MissingToken);
}
