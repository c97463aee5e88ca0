#![cfg(test)]
use lotto_common::config::Config;
use lotto_core::tier::classify;
use lotto_core::{
    PrizeTier, RandomTicketSource, ResultAggregator, Ticket, TicketSource, ValidationError,
    WinningSet, validator,
};

fn winning() -> WinningSet {
    WinningSet::new(&[1, 2, 3, 4, 5, 6], 7).unwrap()
}

/*************************************************************
                   End-to-end scenarios
**************************************************************/

#[test]
fn jackpot_ticket_wins_six() {
    let ticket = Ticket::new(&[1, 2, 3, 4, 5, 6]).unwrap();
    let aggregator = ResultAggregator::new(vec![ticket], winning()).unwrap();
    let result = aggregator.winning_result();

    assert_eq!(result.count(PrizeTier::Six), 1);
    for tier in PrizeTier::ALL.iter().filter(|&&t| t != PrizeTier::Six) {
        assert_eq!(result.count(*tier), 0, "{tier:?} should be empty");
    }
    assert_eq!(aggregator.total_prize(), 2_000_000_000);
}

#[test]
fn five_plus_bonus_wins_second_prize() {
    let ticket = Ticket::new(&[1, 2, 3, 4, 5, 7]).unwrap();
    let aggregator = ResultAggregator::new(vec![ticket], winning()).unwrap();

    assert_eq!(aggregator.winning_result().count(PrizeTier::FiveBonus), 1);
    assert_eq!(aggregator.total_prize(), 30_000_000);
}

#[test]
fn purchase_amount_drives_ticket_count() {
    let purchase = validator::purchase_amount("1000").unwrap();
    let mut source = RandomTicketSource::new(Some(3));
    assert_eq!(source.draw_many(purchase.ticket_count()).len(), 1);

    assert_eq!(
        validator::purchase_amount("999"),
        Err(ValidationError::NotMultipleOfPrice(999))
    );
}

#[test]
fn raw_input_flows_into_aggregation() {
    let numbers = validator::winning_numbers("1, 2, 3, 4, 5, 6").unwrap();
    let bonus = validator::bonus_number("7", &numbers).unwrap();
    let winning = WinningSet::new(&numbers, bonus).unwrap();

    let tickets = vec![
        Ticket::new(&[1, 2, 3, 40, 41, 42]).unwrap(),
        Ticket::new(&[10, 11, 12, 13, 14, 15]).unwrap(),
    ];
    let aggregator = ResultAggregator::new(tickets, winning).unwrap();
    assert_eq!(aggregator.total_prize(), 5_000);
    assert_eq!(aggregator.return_rate(), 250.0);
}

/*************************************************************
                  Properties over random draws
**************************************************************/

#[test]
fn counts_sum_to_ticket_count() {
    let cfg = Config { seed: Some(2024), ..Default::default() };
    let mut source = RandomTicketSource::from_config(&cfg);

    for count in [1, 7, 100, 1_000] {
        let tickets = source.draw_many(count);
        let aggregator = ResultAggregator::new(tickets, winning()).unwrap();
        assert_eq!(aggregator.winning_result().total_tickets(), count);
        assert_eq!(aggregator.ticket_count(), count);
    }
}

#[test]
fn aggregation_ignores_ticket_order() {
    let mut source = RandomTicketSource::new(Some(11));
    let tickets = source.draw_many(300);

    let mut shuffled = tickets.clone();
    shuffled.sort();
    shuffled.rotate_left(17);

    let a = ResultAggregator::new(tickets, winning()).unwrap();
    let b = ResultAggregator::new(shuffled, winning()).unwrap();
    assert_eq!(a.winning_result(), b.winning_result());
    assert_eq!(a.total_prize(), b.total_prize());
}

#[test]
fn total_prize_is_literal_sum() {
    let mut source = RandomTicketSource::new(Some(5));
    let aggregator = ResultAggregator::new(source.draw_many(2_000), winning()).unwrap();
    let result = aggregator.winning_result();

    let expected: u64 = PrizeTier::ALL
        .iter()
        .map(|&tier| result.count(tier) * tier.prize())
        .sum();
    assert_eq!(aggregator.total_prize(), expected);
}

#[test]
fn aggregator_agrees_with_classifier() {
    let set = winning();
    let mut source = RandomTicketSource::new(Some(8));
    let tickets = source.draw_many(200);

    let mut expected = std::collections::BTreeMap::new();
    for tier in PrizeTier::ALL {
        expected.insert(tier, 0u64);
    }
    for ticket in &tickets {
        *expected
            .entry(classify(ticket, set.numbers(), set.bonus()))
            .or_default() += 1;
    }

    let aggregator = ResultAggregator::new(tickets, set).unwrap();
    assert_eq!(aggregator.winning_result().as_map(), expected);
}

/*************************************************************
                   Construction failures
**************************************************************/

#[test]
fn invalid_tickets_are_rejected() {
    assert!(Ticket::new(&[1, 2, 3, 4, 5]).is_err());
    assert!(Ticket::new(&[1, 2, 3, 4, 5, 5]).is_err());
    assert!(Ticket::new(&[0, 1, 2, 3, 4, 5]).is_err());
    assert!(Ticket::new(&[1, 2, 3, 4, 5, 46]).is_err());
}

#[test]
fn bonus_collision_is_rejected() {
    assert_eq!(
        WinningSet::new(&[1, 2, 3, 4, 5, 6], 3),
        Err(ValidationError::BonusCollision(3))
    );
}
