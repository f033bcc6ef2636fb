mod utils;

use auction_views::{parse_bid, Auction, AuctionActions, AuctionPatch, Component, Document, EventKind, LotStatus};
use std::cell::RefCell;
use std::rc::Rc;
use utils::*;

fn panel(doc: &Document) -> (Auction, Rc<RefCell<Vec<Option<i64>>>>) {
    let root = mount(doc, AUCTION_PANEL);
    let bids = Rc::new(RefCell::new(Vec::new()));
    let sink = bids.clone();
    let auction = Auction::new(
        doc,
        root,
        AuctionActions::on_submit(move |bid| sink.borrow_mut().push(bid)),
    )
    .unwrap();
    (auction, bids)
}

#[test]
fn status_gates_history_and_form() {
    let doc = Document::new();
    let (mut auction, _) = panel(&doc);
    let view = auction.view().clone();

    auction.render(AuctionPatch {
        status: Some(LotStatus::Active),
        ..Default::default()
    });
    assert!(!view.is_hidden(auction.history()));
    assert!(!view.is_hidden(auction.form()));

    auction.render(AuctionPatch {
        status: Some(LotStatus::Closed),
        ..Default::default()
    });
    assert!(view.is_hidden(auction.history()));
    assert!(view.is_hidden(auction.form()));

    auction.render(AuctionPatch {
        status: Some(LotStatus::Active),
        ..Default::default()
    });
    assert_eq!(doc.style(auction.history(), "display"), None);

    auction.render(AuctionPatch {
        status: Some(LotStatus::Wait),
        ..Default::default()
    });
    assert!(view.is_hidden(auction.history()));
    assert!(view.is_hidden(auction.form()));
}

#[test]
fn history_is_rebuilt_with_formatted_items() {
    let doc = Document::new();
    let (mut auction, _) = panel(&doc);

    auction.render(AuctionPatch {
        history: Some(vec![100, 2500]),
        ..Default::default()
    });
    let items = doc.children(auction.bids());
    assert_eq!(texts(&doc, &items), vec!["100", "2 500"]);
    for item in &items {
        assert_eq!(doc.tag(*item).as_deref(), Some("li"));
        assert!(doc.has_class(*item, "lot__history-item"));
    }

    auction.render(AuctionPatch {
        history: Some(Vec::new()),
        ..Default::default()
    });
    assert!(doc.children(auction.bids()).is_empty());
}

#[test]
fn text_fields_and_next_bid() {
    let doc = Document::new();
    let (mut auction, _) = panel(&doc);
    let root = auction.render(AuctionPatch {
        time: Some("1д 02:03:04".to_string()),
        label: Some("Открыто до 01.11 12:00".to_string()),
        next_bid: Some(7401),
        ..Default::default()
    });
    let timer = doc.find_required(".lot__auction-timer", root).unwrap();
    let label = doc.find_required(".lot__auction-text", root).unwrap();
    assert_eq!(doc.text_content(timer), "1д 02:03:04");
    assert_eq!(doc.text_content(label), "Открыто до 01.11 12:00");
    assert_eq!(doc.value(auction.input()), "7401");
}

#[test]
fn submit_parses_the_input_and_prevents_navigation() {
    let doc = Document::new();
    let (auction, bids) = panel(&doc);

    doc.set_value(auction.input(), "2500");
    let navigated = doc.dispatch(auction.form(), EventKind::Submit);
    assert!(!navigated);
    assert_eq!(*bids.borrow(), vec![Some(2500)]);
}

#[test]
fn clicking_the_submit_button_submits_once() {
    let doc = Document::new();
    let (auction, bids) = panel(&doc);

    doc.set_value(auction.input(), " 3100 ");
    doc.dispatch(auction.button(), EventKind::Click);
    assert_eq!(*bids.borrow(), vec![Some(3100)]);
}

#[test]
fn non_numeric_input_is_passed_through_unvalidated() {
    let doc = Document::new();
    let (auction, bids) = panel(&doc);

    doc.set_value(auction.input(), "много");
    doc.dispatch(auction.form(), EventKind::Submit);
    assert_eq!(*bids.borrow(), vec![None]);
}

#[test]
fn focus_moves_to_the_input() {
    let doc = Document::new();
    let (auction, _) = panel(&doc);
    assert_eq!(doc.focused(), None);
    auction.focus();
    assert_eq!(doc.focused(), Some(auction.input()));
}

#[test]
fn parse_bid_takes_the_integer_prefix() {
    assert_eq!(parse_bid("42"), Some(42));
    assert_eq!(parse_bid("  42abc"), Some(42));
    assert_eq!(parse_bid("-5"), Some(-5));
    assert_eq!(parse_bid("+7"), Some(7));
    assert_eq!(parse_bid("12.9"), Some(12));
    assert_eq!(parse_bid(""), None);
    assert_eq!(parse_bid("abc"), None);
    assert_eq!(parse_bid("-"), None);
}

#[test]
fn auction_patch_deserializes_camel_case() {
    let patch: AuctionPatch =
        serde_json::from_str(r#"{"nextBid": 150, "status": "closed", "history": [100]}"#).unwrap();
    assert_eq!(patch.next_bid, Some(150));
    assert_eq!(patch.status, Some(LotStatus::Closed));
    assert_eq!(patch.history, Some(vec![100]));
    assert_eq!(patch.time, None);
}

#[test]
fn panel_requires_its_form() {
    let doc = Document::new();
    let root = mount(&doc, r#"<div><p class="lot__auction-timer"></p></div>"#);
    assert!(Auction::new(&doc, root, AuctionActions::default()).is_err());
}

#[test]
fn repeated_renders_keep_the_document_size_stable() {
    let doc = Document::new();
    let (mut auction, _) = panel(&doc);
    let tick = |n: usize| AuctionPatch {
        time: Some(format!("00:00:{:02}", n % 60)),
        label: Some("До закрытия лота".to_string()),
        history: Some(vec![1, 2, 3]),
        next_bid: Some(4),
        ..Default::default()
    };

    auction.render(tick(0));
    let size = doc.len();
    for n in 1..=150 {
        auction.render(tick(n));
    }
    assert_eq!(doc.len(), size);
    assert_eq!(doc.children(auction.bids()).len(), 3);
}
