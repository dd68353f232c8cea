// tests/actor_tests.rs
//
// Актёры сессий и реестр:
//  1) идемпотентное (в том числе конкурентное) создание
//  2) сквозной сценарий через строковые запросы
//  3) K конкурентных команд -> ровно K последовательных переходов
//  4) случайное перемешивание bet/deal/hit/stay сохраняет деньги
//  5) актёр даёт те же результаты, что и однопоточный движок
//  6) неверный токен: по умолчанию отклоняется вызов, с lockout: сессия закрывается
//  7) нарушение инварианта останавливает сессию

use std::sync::Arc;

use blackjack_engine::actor::{SessionError, SessionRegistry};
use blackjack_engine::api::{handle_request, ApiError, Request};
use blackjack_engine::domain::{Card, Chips, Deck};
use blackjack_engine::engine::{apply_command, Command, EngineError, HouseRules, Report};
use blackjack_engine::infra::{session_seed, DeterministicRng, ServiceConfig};
use blackjack_engine::state::{SessionSnapshot, SessionState};

fn card(s: &str) -> Card {
    s.parse().expect("valid card string")
}

fn rigged(prefix: &[&str]) -> Deck {
    Deck::from_cards(prefix.iter().map(|s| card(s)).chain(Deck::packs(1).cards))
}

async fn status(registry: &SessionRegistry, name: &str) -> SessionSnapshot {
    match registry.submit(name, Command::Status).await {
        Ok(Report::Status(s)) => s,
        other => panic!("expected status, got {other:?}"),
    }
}

/// 8 упаковок: раздача тратит не больше 57 очков пессимистичной суммы
/// (игрок <= 21 + 10, дилер <= 16 + 10), так что 40 раздач гарантированно
/// укладываются в один шуз без перетасовки и без опустошения колоды.
fn eight_pack_config() -> ServiceConfig {
    ServiceConfig {
        rules: HouseRules {
            default_pack_count: 8,
            ..HouseRules::default()
        },
        ..ServiceConfig::default()
    }
}

fn request(op: &str, name: &str, params: &[(&str, &str)]) -> Request {
    params
        .iter()
        .fold(Request::new(op).param("name", name), |r, (k, v)| r.param(*k, *v))
}

//
// TEST 1 — создание идемпотентно
//
#[tokio::test]
async fn create_session_is_idempotent() {
    let registry = SessionRegistry::new(ServiceConfig::default());

    let first = registry.create_session("alice", Chips::whole(100)).await;
    assert!(first.created);
    registry
        .submit("alice", Command::Bet(Chips::whole(10)))
        .await
        .unwrap();

    let second = registry.create_session("alice", Chips::whole(5000)).await;
    assert!(!second.created);

    let s = status(&registry, "alice").await;
    assert_eq!(s.funds, Chips::whole(90), "re-creating must not reset the session");
    assert_eq!(registry.len().await, 1);
    assert_eq!(registry.names().await, vec!["alice".to_string()]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creation_spawns_one_actor() {
    let registry = Arc::new(SessionRegistry::new(ServiceConfig::default()));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                registry
                    .create_session("bob", Chips::whole(100 + i))
                    .await
                    .created
            })
        })
        .collect();

    let mut created = 0;
    for t in tasks {
        if t.await.unwrap() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(registry.len().await, 1);
    assert!(registry.contains("bob").await);
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let registry = SessionRegistry::new(ServiceConfig::default());
    assert_eq!(
        registry.submit("nobody", Command::Funds).await,
        Err(SessionError::NotFound("nobody".into()))
    );

    let err = handle_request(&registry, &request("deal", "nobody", &[]))
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Session(SessionError::NotFound("nobody".into())));
}

//
// TEST 2 — сквозной сценарий через строковые запросы
//
#[tokio::test]
async fn end_to_end_rigged_scenario() {
    let registry = SessionRegistry::new(ServiceConfig::default());
    let rules = HouseRules::default();

    let state = SessionState::new("alice", Chips::whole(100), &rules)
        .with_deck(rigged(&["Td", "Tc", "5h", "6s", "5d"]));
    assert!(registry.create_session_from_state(state).await.created);

    let text = handle_request(&registry, &request("bet", "alice", &[("amount", "10")]))
        .await
        .unwrap();
    assert_eq!(text, "Your current bet: 10.00 parsohns of space cash");

    let text = handle_request(&registry, &request("deal", "alice", &[]))
        .await
        .unwrap();
    assert_eq!(text, "Dealer showing: Td\nYou have: [Tc 6s]\nSum: 16");

    let text = handle_request(&registry, &request("hit", "alice", &[]))
        .await
        .unwrap();
    assert_eq!(text, "Dealer showing: Td\nYou have: [Tc 6s 5d]\nSum: 21");

    let text = handle_request(&registry, &request("stay", "alice", &[]))
        .await
        .unwrap();
    assert_eq!(
        text,
        "You win 10.00 parsohns of space cash\nYou: 21\nDealer: 17"
    );

    let text = handle_request(&registry, &request("funds", "alice", &[]))
        .await
        .unwrap();
    assert_eq!(text, "Your remaining funds: 110.00 parsohns of space cash");

    // невалидный параметр не доходит до актёра
    let err = handle_request(&registry, &request("bet", "alice", &[("amount", "ten")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter { name: "amount", .. }));
}

#[tokio::test]
async fn create_session_through_request() {
    let registry = SessionRegistry::with_seed(ServiceConfig::default(), 1);

    let text = handle_request(&registry, &request("create-session", "carol", &[("amount", "50")]))
        .await
        .unwrap();
    assert_eq!(text, "Game created, user carol");

    let text = handle_request(&registry, &request("create-session", "carol", &[("amount", "50")]))
        .await
        .unwrap();
    assert_eq!(text, "User carol already has a game");

    assert_eq!(status(&registry, "carol").await.funds, Chips::whole(50));
}

//
// TEST 3 — K конкурентных ставок = K последовательных переходов
//
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_bets_are_serialized() {
    const K: i64 = 50;
    let registry = Arc::new(SessionRegistry::new(ServiceConfig::default()));
    registry.create_session("dave", Chips::whole(1000)).await;

    let tasks: Vec<_> = (0..K)
        .map(|_| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                registry.submit("dave", Command::Bet(Chips::whole(5))).await
            })
        })
        .collect();

    let mut bets_seen = Vec::new();
    for t in tasks {
        match t.await.unwrap().unwrap() {
            Report::BetPlaced { bet, funds } => {
                assert_eq!(bet + funds, Chips::whole(1000), "no torn update");
                bets_seen.push(bet);
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    // каждая команда увидела своё уникальное промежуточное состояние
    bets_seen.sort();
    let expected: Vec<_> = (1..=K).map(|i| Chips::whole(5 * i)).collect();
    assert_eq!(bets_seen, expected);

    let s = status(&registry, "dave").await;
    assert_eq!(s.bet, Chips::whole(5 * K));
    assert_eq!(s.funds, Chips::whole(1000 - 5 * K));
}

//
// TEST 4 — перемешанные раздачи нескольких вызывающих сохраняют деньги
//
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn interleaved_hands_conserve_money() {
    let registry = Arc::new(SessionRegistry::with_seed(eight_pack_config(), 2024));
    registry.create_session("erin", Chips::whole(500)).await;
    let initial = status(&registry, "erin").await.total_money();

    let script = [
        Command::Deposit(Chips::whole(1)),
        Command::Bet(Chips::whole(5)),
        Command::Deal,
        Command::Hit,
        Command::Stay,
        Command::Hand,
        Command::Funds,
    ];
    const CALLERS: usize = 8;
    const ROUNDS: usize = 5;

    let tasks: Vec<_> = (0..CALLERS)
        .map(|caller| {
            let registry = Arc::clone(&registry);
            let script = script.clone();
            tokio::spawn(async move {
                let mut deposited = 0;
                for round in 0..ROUNDS {
                    for i in 0..script.len() {
                        let command = script[(i + caller + round) % script.len()].clone();
                        let is_deposit = matches!(command, Command::Deposit(_));
                        let report = registry.submit("erin", command).await.expect("session alive");
                        if is_deposit {
                            assert!(matches!(report, Report::Deposited { .. }));
                            deposited += 1;
                        }
                        tokio::task::yield_now().await;
                    }
                }
                deposited
            })
        })
        .collect();

    let mut deposits = 0;
    for t in tasks {
        deposits += t.await.unwrap();
    }

    let s = status(&registry, "erin").await;
    assert_eq!(deposits, (CALLERS * ROUNDS) as i64);
    assert_eq!(s.total_money(), initial + Chips::whole(deposits));
    assert!(s.funds >= Chips::ZERO);
    assert!(s.bet >= Chips::ZERO);
    // руки либо обе сданы, либо обе пусты
    assert_eq!(s.player_cards == 0, s.dealer_cards == 0);
}

//
// TEST 5 — актёр эквивалентен однопоточному прогону движка
//
#[tokio::test]
async fn actor_matches_single_threaded_engine() {
    const SEED: u64 = 77;
    let config = eight_pack_config();
    let registry = SessionRegistry::with_seed(config.clone(), SEED);
    registry.create_session("frank", Chips::whole(200)).await;

    let mut direct = SessionState::new("frank", Chips::whole(200), &config.rules);
    let mut rng = DeterministicRng::from_seed(session_seed(SEED, "frank"));

    let mut commands = Vec::new();
    for _ in 0..40 {
        commands.extend([
            Command::Bet(Chips::whole(5)),
            Command::Deal,
            Command::Hit,
            Command::Stay,
            Command::Status,
        ]);
    }

    for command in commands {
        let expected = apply_command(&mut direct, &config.rules, &mut rng, &command).unwrap();
        let got = registry.submit("frank", command).await.unwrap();
        assert_eq!(got, expected);
    }
}

//
// TEST 6 — привилегированные команды и неверный токен
//
#[tokio::test]
async fn bad_token_rejects_only_the_call_by_default() {
    let registry = SessionRegistry::new(ServiceConfig::default());
    registry.create_session("gina", Chips::whole(100)).await;

    let report = registry
        .submit("gina", Command::ShowDeck { token: "guess".into() })
        .await
        .unwrap();
    assert_eq!(report, Report::AuthFailed);

    // сессия продолжает работать
    let report = registry
        .submit(
            "gina",
            Command::ResizeDeck {
                pack_count: 1,
                token: "titanoboa".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(report, Report::DeckResized { pack_count: 1, cards: 52 });

    let report = registry
        .submit("gina", Command::ShowDeck { token: "titanoboa".into() })
        .await
        .unwrap();
    assert!(matches!(report, Report::Deck { ref cards } if cards.len() == 52));
}

#[tokio::test]
async fn bad_token_locks_out_when_configured() {
    let config = ServiceConfig {
        lockout_on_auth_failure: true,
        ..ServiceConfig::default()
    };
    let registry = SessionRegistry::new(config);
    registry.create_session("hank", Chips::whole(100)).await;

    let report = registry
        .submit("hank", Command::ShowDeck { token: "guess".into() })
        .await
        .unwrap();
    assert_eq!(report, Report::AuthFailed);

    assert_eq!(
        registry.submit("hank", Command::Funds).await,
        Err(SessionError::Closed("hank".into()))
    );

    let handle = registry.get("hank").await.unwrap();
    assert!(handle.is_closed());
}

//
// TEST 7 — нарушение инварианта (пустая колода в середине раздачи)
//
#[tokio::test]
async fn invariant_violation_stops_the_session() {
    let registry = SessionRegistry::new(ServiceConfig::default());
    let rules = HouseRules::default();

    let mut state = SessionState::new("ivan", Chips::whole(90), &rules).with_deck(Deck::default());
    state.player.bet = Chips::whole(10);
    state.player.hand.push(card("Tc"));
    state.player.hand.push(card("2s"));
    state.dealer.hand.push(card("9h"));
    state.dealer.hand.push(card("7d"));
    registry.create_session_from_state(state).await;

    assert_eq!(
        registry.submit("ivan", Command::Hit).await,
        Err(SessionError::Engine(EngineError::DeckExhausted))
    );
    assert_eq!(
        registry.submit("ivan", Command::Funds).await,
        Err(SessionError::Closed("ivan".into()))
    );
}
