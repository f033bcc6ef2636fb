use auction_views::{
    format_time_left, Auction, AuctionActions, AuctionPatch, CardActions, CardPatch, CatalogItem,
    CatalogItemStatus, Component, Document, EventEmitter, Events, Lot, Page, PagePatch, ViewError,
};
use chrono::Utc;
use log::{error, info};
use std::rc::Rc;

const TEMPLATES: &str = r#"
<div class="page">
  <div class="page__wrapper">
    <header class="header">
      <button class="header__basket"><span class="header__basket-counter">0</span></button>
    </header>
    <main class="catalog__items"></main>
    <section class="lot">
      <p class="lot__auction-timer"></p>
      <p class="lot__auction-text"></p>
      <div class="lot__history"><ul class="lot__history-bids"></ul></div>
      <form class="lot__bid">
        <input class="form__input" type="number">
        <button class="button" type="submit">Сделать ставку</button>
      </form>
    </section>
  </div>
</div>
<template id="card">
  <div class="card">
    <span class="card__status">Открыто</span>
    <img class="card__image" src="" alt="">
    <h2 class="card__title"></h2>
    <p class="card__description"></p>
  </div>
</template>
"#;

fn load_lots() -> Result<Vec<Lot>, String> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {}", path, e))?,
        None => include_str!("../demos/lots.json").to_string(),
    };
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse lots: {}", e))
}

fn run(lots: Vec<Lot>) -> Result<String, ViewError> {
    let doc = Document::new();
    let roots = doc.import_html(TEMPLATES);
    let page_root = *roots
        .first()
        .ok_or_else(|| ViewError::MissingTemplate("page".to_string()))?;

    let events = Rc::new(EventEmitter::new());
    events.on_all(|name, _| info!("event {}", name));
    let publisher: Rc<dyn Events> = events.clone();

    let mut page = Page::new(&doc, page_root, publisher)?;
    let lot_panel = doc.find_required(".lot", page_root)?;
    let mut auction = Auction::new(
        &doc,
        lot_panel,
        AuctionActions::on_submit(|bid| info!("bid placed: {:?}", bid)),
    )?;

    let mut cards = Vec::with_capacity(lots.len());
    for lot in &lots {
        let container = doc.template("card")?;
        let id = lot.id.clone();
        let mut card = CatalogItem::bind(
            &doc,
            container,
            CardActions::on_click(move |_| info!("open lot {}", id)),
        )?;
        cards.push(card.render(CardPatch {
            id: Some(lot.id.clone()),
            title: Some(lot.title.clone()),
            description: Some(lot.description.clone()),
            image: Some(lot.image.clone()),
            status: Some(CatalogItemStatus {
                status: lot.status.into(),
                label: lot.status_label(),
            }),
        }));
    }

    page.render(PagePatch {
        catalog: Some(cards),
        locked: Some(false),
        counter: Some(0),
    });

    if let Some(lot) = lots.iter().find(|lot| lot.status.is_active()).or(lots.first()) {
        auction.render(AuctionPatch {
            time: Some(format_time_left(Utc::now(), lot.datetime)),
            label: Some(lot.status_label()),
            next_bid: Some(lot.next_bid()),
            history: Some(lot.history.clone()),
            status: Some(lot.status),
        });
    }

    Ok(doc.to_html(page_root))
}

fn main() {
    env_logger::init();

    let lots = match load_lots() {
        Ok(lots) => lots,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!("Rendering {} lot(s)", lots.len());

    match run(lots) {
        Ok(html) => println!("{}", html),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
