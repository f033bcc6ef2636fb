#![allow(dead_code)]
use auction_views::{Document, EventEmitter, Events, NodeId};
use std::cell::RefCell;
use std::rc::Rc;

pub const CATALOG_CARD: &str = r#"
<div class="card">
  <span class="card__status card__status_closed">Закрыто</span>
  <img class="card__image" src="" alt="">
  <h2 class="card__title">Лот</h2>
  <p class="card__description">Описание</p>
  <button class="card__button">Подробнее</button>
</div>
"#;

pub const CATALOG_CARD_BARE: &str = r#"
<div class="card">
  <span class="card__status">Открыто</span>
  <img class="card__image" src="" alt="">
  <h2 class="card__title">Лот</h2>
</div>
"#;

pub const CATALOG_CARD_NO_TITLE: &str = r#"
<div class="card">
  <span class="card__status">Открыто</span>
  <img class="card__image" src="" alt="">
</div>
"#;

pub const LOT_CARD: &str = r#"
<div class="lot">
  <img class="lot__image" src="" alt="">
  <h2 class="lot__title"></h2>
  <p class="lot__description"></p>
  <div class="lot__status"><span class="lot__placeholder">...</span></div>
</div>
"#;

pub const LOT_CARD_BARE: &str = r#"
<div class="lot">
  <img class="lot__image" src="" alt="">
  <h2 class="lot__title"></h2>
  <div class="lot__status"></div>
</div>
"#;

pub const BID_CARD_SELECTOR: &str = r#"
<div class="bid">
  <img class="bid__image" src="" alt="">
  <h3 class="bid__title"></h3>
  <span class="bid__amount"></span>
  <span class="bid__status">Лидирует</span>
  <label class="bid__selector"><input class="bid__selector-input" type="checkbox"></label>
</div>
"#;

pub const BID_CARD_BUTTON_AND_SELECTOR: &str = r#"
<div class="bid">
  <img class="bid__image" src="" alt="">
  <h3 class="bid__title"></h3>
  <span class="bid__amount"></span>
  <span class="bid__status">Лидирует</span>
  <label class="bid__selector"><input class="bid__selector-input" type="checkbox"></label>
  <button class="bid__button" type="button">Открыть</button>
</div>
"#;

pub const BID_CARD_BARE: &str = r#"
<div class="bid">
  <img class="bid__image" src="" alt="">
  <h3 class="bid__title"></h3>
  <span class="bid__amount"></span>
  <span class="bid__status">Лидирует</span>
</div>
"#;

pub const AUCTION_PANEL: &str = r#"
<div class="lot__auction">
  <p class="lot__auction-timer">00:00:00</p>
  <p class="lot__auction-text"></p>
  <div class="lot__history">
    <ul class="lot__history-bids"><li class="lot__history-item">1</li></ul>
  </div>
  <form class="lot__bid">
    <input class="form__input" type="number">
    <button class="button" type="submit">Сделать ставку</button>
  </form>
</div>
"#;

pub const BASKET: &str = r#"
<div class="basket">
  <ul class="basket__list"></ul>
  <span class="basket__total"></span>
  <button class="basket__action">Оформить</button>
</div>
"#;

pub const BASKET_BARE: &str = r#"
<div class="basket">
  <ul class="basket__list"></ul>
</div>
"#;

pub const PAGE: &str = r#"
<div class="page">
  <div class="page__wrapper page__wrapper_dark">
    <header class="header">
      <button class="header__basket"><span class="header__basket-counter">0</span></button>
    </header>
    <main class="catalog__items"></main>
  </div>
</div>
"#;

pub const SUCCESS: &str = r#"
<div class="order-success">
  <h2 class="state__title">Ставка принята</h2>
  <p class="state__total"></p>
  <button class="state__action">Закрыть</button>
</div>
"#;

pub const SUCCESS_BARE: &str = r#"
<div class="order-success">
  <button class="state__action">Закрыть</button>
</div>
"#;

/// Imports `html` and returns its first top-level element.
pub fn mount(doc: &Document, html: &str) -> NodeId {
    doc.import_html(html)[0]
}

pub fn counter() -> (Rc<RefCell<usize>>, impl Fn()) {
    let count = Rc::new(RefCell::new(0));
    let handle = count.clone();
    (count, move || *handle.borrow_mut() += 1)
}

/// A broker plus a log of every event name it saw.
pub fn recording_events() -> (Rc<EventEmitter>, Rc<RefCell<Vec<String>>>, Rc<dyn Events>) {
    let emitter = Rc::new(EventEmitter::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    emitter.on_all(move |name, _| log.borrow_mut().push(name.to_string()));
    let publisher: Rc<dyn Events> = emitter.clone();
    (emitter, seen, publisher)
}

pub fn texts(doc: &Document, nodes: &[NodeId]) -> Vec<String> {
    nodes.iter().map(|n| doc.text_content(*n)).collect()
}
