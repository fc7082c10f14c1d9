use proptest::prelude::*;
use webnote::model::Page;
use webnote::pages::PageStore;
use webnote::session::{EditorSession, ModalState};
use webnote::store::{InMemoryStore, PersistenceAdapter};

#[derive(Debug, Clone)]
enum Op {
    SetText(String),
    Create,
    Select(usize),
    Rename(usize, String),
    Delete(usize),
    Clear,
    Undo,
    RequestRename,
    ConfirmRename(String),
    CancelRename,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Op::SetText),
        Just(Op::Create),
        (0usize..6).prop_map(Op::Select),
        ((0usize..6), "[a-z ]{0,6}").prop_map(|(i, n)| Op::Rename(i, n)),
        (0usize..6).prop_map(Op::Delete),
        Just(Op::Clear),
        Just(Op::Undo),
        Just(Op::RequestRename),
        "[a-z ]{0,6}".prop_map(Op::ConfirmRename),
        Just(Op::CancelRename),
        Just(Op::RequestDelete),
        Just(Op::ConfirmDelete),
        Just(Op::CancelDelete),
    ]
}

fn page() -> impl Strategy<Value = Page> {
    ("[A-Za-z0-9 ]{0,10}", ".{0,20}").prop_map(|(name, text)| Page::new(name, text))
}

fn apply(session: &mut EditorSession<InMemoryStore>, op: Op) {
    match op {
        Op::SetText(text) => {
            session.set_text(text);
        }
        Op::Create => {
            session.create_page();
        }
        Op::Select(i) => {
            session.select_page(i);
        }
        Op::Rename(i, name) => {
            session.select_page(i);
            session.request_rename();
            session.confirm_rename(&name);
        }
        Op::Delete(i) => {
            session.select_page(i);
            session.request_delete();
            session.confirm_delete();
        }
        Op::Clear => {
            session.clear();
        }
        Op::Undo => {
            session.undo();
        }
        Op::RequestRename => {
            session.request_rename();
        }
        Op::ConfirmRename(name) => {
            session.confirm_rename(&name);
        }
        Op::CancelRename => {
            session.cancel_rename();
        }
        Op::RequestDelete => {
            session.request_delete();
        }
        Op::ConfirmDelete => {
            session.confirm_delete();
        }
        Op::CancelDelete => {
            session.cancel_delete();
        }
    }
}

proptest! {
    #[test]
    fn session_never_breaks_collection_invariants(ops in prop::collection::vec(op(), 0..60)) {
        let mut session = EditorSession::open(InMemoryStore::new());
        for op in ops {
            apply(&mut session, op);

            let store = session.store();
            prop_assert!(store.len() >= 1);
            prop_assert!(store.active_index() < store.len());
        }
    }

    #[test]
    fn store_never_breaks_collection_invariants(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = PageStore::load(InMemoryStore::new());
        for op in &ops {
            match op {
                Op::Create => { store.create_page(); }
                Op::Select(i) => { let _ = store.select_page(*i); }
                Op::SetText(text) => store.set_active_text(text.clone()),
                Op::Rename(i, name) => { let _ = store.rename_page(*i, name); }
                Op::Delete(i) => { let _ = store.delete_page(*i); }
                _ => {}
            }
            prop_assert!(store.len() >= 1);
            prop_assert!(store.active_index() < store.len());
        }
    }

    #[test]
    fn cancelling_modals_changes_nothing(
        setup in prop::collection::vec(op(), 0..20),
        select in 0usize..6,
    ) {
        let mut session = EditorSession::open(InMemoryStore::new());
        for op in setup {
            apply(&mut session, op);
        }
        // Get back to Idle whatever the setup left open
        session.cancel_rename();
        session.cancel_delete();
        session.select_page(select);

        let pages = session.store().pages().to_vec();
        let active = session.active_index();

        session.request_rename();
        session.cancel_rename();
        session.cancel_rename();
        session.request_delete();
        session.cancel_delete();
        session.cancel_delete();

        prop_assert_eq!(session.store().pages(), pages.as_slice());
        prop_assert_eq!(session.active_index(), active);
        prop_assert_eq!(session.modal(), ModalState::Idle);
    }

    #[test]
    fn save_then_load_round_trips(pages in prop::collection::vec(page(), 1..8)) {
        let mut adapter = InMemoryStore::new();
        adapter.save(&pages).unwrap();

        let store = PageStore::load(adapter);
        prop_assert_eq!(store.pages(), pages.as_slice());
    }
}
