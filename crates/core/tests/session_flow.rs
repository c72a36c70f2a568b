use banatro_core::{
    insert_record, Event, EventBus, GameSession, OfferItem, Phase, ScoreRecord, SessionError,
    SortBy, UpgradeKind,
};

fn started(seed: u64) -> (GameSession, EventBus) {
    let mut session = GameSession::from_seed(seed);
    let mut events = EventBus::default();
    session
        .deal(&mut events)
        .expect("fresh session starts in the playing phase");
    (session, events)
}

fn total_cards(session: &GameSession) -> usize {
    session.player.deck.remaining() + session.player.deck.discarded() + session.player.hand.len()
}

#[test]
fn deal_fills_to_hand_size_and_conserves_cards() {
    let (session, _) = started(7);
    assert_eq!(session.player.hand.len(), 8);
    assert_eq!(session.player.deck.remaining(), 44);
    assert_eq!(total_cards(&session), 52);
}

#[test]
fn same_seed_runs_are_identical() {
    let (a, _) = started(99);
    let (b, _) = started(99);
    assert_eq!(a.player.hand.cards, b.player.hand.cards);

    let (c, _) = started(100);
    assert_ne!(a.player.hand.cards, c.player.hand.cards);
}

#[test]
fn play_scores_refills_and_spends_a_hand() {
    let (mut session, mut events) = started(7);
    events.drain().count();

    let breakdown = session
        .play(&[0, 1, 2], &mut events)
        .expect("three in-bounds cards");
    assert!(breakdown.points > 0);
    assert_eq!(session.rules.hands_remaining, 4);
    assert_eq!(session.player.hand.len(), 8);
    assert_eq!(session.player.deck.discarded(), 3);
    assert_eq!(total_cards(&session), 52);

    let fired: Vec<Event> = events.drain().collect();
    assert!(matches!(fired[0], Event::HandScored { .. }));
}

#[test]
fn play_rejects_bad_selections_without_side_effects() {
    let (mut session, mut events) = started(7);
    let before = session.player.hand.cards.clone();

    assert_eq!(
        session.play(&[], &mut events),
        Err(SessionError::InvalidCardCount)
    );
    assert_eq!(
        session.play(&[0, 1, 2, 3, 4, 5], &mut events),
        Err(SessionError::InvalidCardCount)
    );
    assert_eq!(
        session.play(&[42], &mut events),
        Err(SessionError::InvalidSelection)
    );
    assert_eq!(
        session.play(&[1, 1], &mut events),
        Err(SessionError::InvalidSelection)
    );
    assert_eq!(session.player.hand.cards, before);
    assert_eq!(session.rules.hands_remaining, 5);
}

#[test]
fn redraw_swaps_cards_and_spends_a_redraw() {
    let (mut session, mut events) = started(7);
    let kept = session.player.hand.cards[2..].to_vec();

    let count = session.redraw(&[0, 1], &mut events).expect("valid redraw");
    assert_eq!(count, 2);
    assert_eq!(session.rules.redraws_remaining, 4);
    assert_eq!(session.player.hand.len(), 8);
    assert_eq!(session.player.hand.cards[..6], kept[..]);
    assert_eq!(session.rules.hands_remaining, 5);
    assert_eq!(total_cards(&session), 52);
}

#[test]
fn redraw_runs_out() {
    let (mut session, mut events) = started(7);
    session.rules.redraws_remaining = 0;
    assert_eq!(
        session.redraw(&[0], &mut events),
        Err(SessionError::NoRedrawsLeft)
    );
}

#[test]
fn clearing_the_goal_opens_the_shop() {
    let (mut session, mut events) = started(7);
    session.rules.score_goal = 1;
    events.drain().count();

    session.play(&[0, 1, 2, 3, 4], &mut events).expect("play");
    assert_eq!(session.phase, Phase::Shopping);
    assert!(session.shop.is_some());
    assert!(session.player.hand.is_empty());
    assert_eq!(session.player.score, 0);

    let fired: Vec<Event> = events.drain().collect();
    assert!(fired
        .iter()
        .any(|event| matches!(event, Event::RoundCleared { round: 1, .. })));
    assert!(fired
        .iter()
        .any(|event| matches!(event, Event::ShopEntered { .. })));
}

#[test]
fn exhausting_hands_without_the_goal_ends_the_run() {
    let (mut session, mut events) = started(7);
    session.rules.hands_remaining = 1;

    session.play(&[0], &mut events).expect("last hand");
    assert_eq!(session.phase, Phase::GameOver);
    let fired: Vec<Event> = events.drain().collect();
    assert!(fired
        .iter()
        .any(|event| matches!(event, Event::RunEnded { .. })));

    assert_eq!(
        session.play(&[0], &mut events),
        Err(SessionError::InvalidPhase(Phase::GameOver))
    );
}

#[test]
fn an_empty_deck_after_refill_ends_the_run() {
    let (mut session, mut events) = started(7);
    // Leave exactly one card to draw so the refill after playing drains it.
    let stranded = session.player.deck.draw_cards(43);
    session.player.deck.toss(stranded);
    assert_eq!(session.player.deck.remaining(), 1);

    session.play(&[0, 1, 2], &mut events).expect("play");
    assert_eq!(session.phase, Phase::GameOver);
    let fired: Vec<Event> = events.drain().collect();
    let record = fired.iter().find_map(|event| match event {
        Event::RunEnded { record } => Some(*record),
        _ => None,
    });
    assert!(record.is_some());
}

#[test]
fn purchase_joker_debits_and_consumes_pool() {
    let (mut session, mut events) = started(7);
    session.rules.score_goal = 1;
    session.player.coins = 100;
    session.play(&[0, 1, 2, 3, 4], &mut events).expect("clear");
    assert_eq!(session.phase, Phase::Shopping);

    let offer = session.shop.clone().expect("offer rolled");
    let (index, kind) = offer
        .items
        .iter()
        .enumerate()
        .find_map(|(i, item)| match item {
            OfferItem::Joker(kind) => Some((i, *kind)),
            _ => None,
        })
        .expect("full pool always offers jokers");

    let coins_before = session.player.coins;
    session.purchase(index, &mut events).expect("affordable");
    assert_eq!(session.player.coins, coins_before - kind.price());
    assert_eq!(session.player.jokers, vec![kind]);
    assert!(!session.joker_pool().contains(&kind));
    assert_eq!(session.shop.as_ref().map(|o| o.items.len()), Some(2));
}

#[test]
fn purchase_upgrade_takes_effect_immediately() {
    let (mut session, mut events) = started(7);
    session.rules.score_goal = 1;
    session.player.coins = 200;
    session.play(&[0], &mut events).expect("clear");

    let offer = session.shop.clone().expect("offer rolled");
    let (index, upgrade) = offer
        .items
        .iter()
        .enumerate()
        .find_map(|(i, item)| match item {
            OfferItem::Upgrade(kind) => Some((i, *kind)),
            _ => None,
        })
        .expect("every offer carries one upgrade");

    session.purchase(index, &mut events).expect("affordable");
    match upgrade {
        UpgradeKind::HandSize => assert_eq!(session.player.hand.max_size, 9),
        UpgradeKind::Redraw => assert_eq!(session.rules.redraws_remaining, 6),
        UpgradeKind::JokerSlot => assert_eq!(session.player.effective_joker_slots(), 6),
    }
}

#[test]
fn purchase_rejections_leave_coins_alone() {
    let (mut session, mut events) = started(7);
    session.rules.score_goal = 1;
    session.player.coins = 0;
    session.play(&[0], &mut events).expect("clear");
    let earned = session.player.coins;

    assert_eq!(
        session.purchase(0, &mut events),
        Err(SessionError::NotEnoughCoins)
    );
    assert_eq!(
        session.purchase(9, &mut events),
        Err(SessionError::InvalidOfferIndex)
    );
    assert_eq!(session.player.coins, earned);
}

#[test]
fn full_joker_slots_block_the_purchase() {
    let (mut session, mut events) = started(7);
    session.rules.score_goal = 1;
    session.player.coins = 500;
    session.play(&[0], &mut events).expect("clear");

    let slots = session.player.effective_joker_slots();
    let pool: Vec<_> = session.joker_pool().to_vec();
    session.player.jokers = pool[..slots].to_vec();

    let offer = session.shop.clone().expect("offer rolled");
    let index = offer
        .items
        .iter()
        .position(|item| matches!(item, OfferItem::Joker(_)))
        .expect("joker on offer");
    let coins_before = session.player.coins;
    assert_eq!(
        session.purchase(index, &mut events),
        Err(SessionError::NoJokerSlot)
    );
    assert_eq!(session.player.coins, coins_before);
}

#[test]
fn exit_shop_advances_the_round_and_recycles_the_deck() {
    let (mut session, mut events) = started(7);
    session.rules.score_goal = 1;
    session.play(&[0, 1], &mut events).expect("clear round 1");
    events.drain().count();

    session.exit_shop(&mut events).expect("leave the shop");
    assert_eq!(session.phase, Phase::Playing);
    assert_eq!(session.round_no, 2);
    assert_eq!(session.player.score, 0);
    assert_eq!(session.rules.score_goal, 600);
    assert_eq!(session.rules.hands_remaining, 5);
    assert_eq!(session.player.hand.len(), 8);
    assert_eq!(session.player.deck.discarded(), 0);
    assert_eq!(total_cards(&session), 52);

    let fired: Vec<Event> = events.drain().collect();
    assert!(fired
        .iter()
        .any(|event| matches!(event, Event::RoundStarted { round: 2, .. })));
}

#[test]
fn shop_is_gated_on_clearing_a_round() {
    let (mut session, mut events) = started(7);
    assert_eq!(
        session.enter_shop(&mut events),
        Err(SessionError::ShopNotAvailable)
    );
    assert_eq!(
        session.exit_shop(&mut events),
        Err(SessionError::InvalidPhase(Phase::Playing))
    );
}

#[test]
fn new_run_resets_everything() {
    let (mut session, mut events) = started(7);
    session.rules.score_goal = 1;
    session.player.coins = 100;
    session.play(&[0], &mut events).expect("clear");
    session.purchase(0, &mut events).ok();

    session.new_run(&mut events);
    assert_eq!(session.phase, Phase::Playing);
    assert_eq!(session.round_no, 1);
    assert_eq!(session.player.coins, 0);
    assert!(session.player.jokers.is_empty());
    assert_eq!(session.joker_pool().len(), 16);
    assert!(session.shop.is_none());
    assert!(session.player.hand.is_empty());

    session.deal(&mut events).expect("playing phase");
    assert_eq!(session.player.hand.len(), 8);
    assert_eq!(total_cards(&session), 52);
}

#[test]
fn sort_hand_keeps_the_same_cards() {
    let (mut session, _) = started(7);
    let mut before = session.player.hand.cards.clone();
    session.sort_hand(SortBy::Rank);
    let mut after = session.player.hand.cards.clone();
    before.sort_by_key(|c| (c.suit as u8, c.rank as u8));
    after.sort_by_key(|c| (c.suit as u8, c.rank as u8));
    assert_eq!(before, after);
}

#[test]
fn finished_runs_feed_the_record_table() {
    let (mut session, mut events) = started(7);
    session.rules.hands_remaining = 1;
    session.play(&[0], &mut events).expect("last hand");

    let mut records: Vec<ScoreRecord> = Vec::new();
    for event in events.drain() {
        if let Event::RunEnded { record } = event {
            insert_record(&mut records, record);
        }
    }
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].round, 1);
}
