//! Match and deal orchestration.
//!
//! The runner owns the single current snapshot of the match and drives one
//! deal at a time: cut, first distribution, negotiation, second
//! distribution, eight tricks, scoring, dealer rotation. Decisions are
//! delegated to the four player agents; the runner enforces action and card
//! ownership and treats any violation as fatal. Exactly one decision
//! request is outstanding at any time.

mod providers;

use tracing::{debug, info};

pub use providers::{DeckProvider, OrderedDeckProvider, ShuffledDeckProvider};

use crate::agents::PlayerAgent;
use crate::domain::negotiation::{NegotiationOutcome, NegotiationState};
use crate::domain::player_view::{CutView, DealStartView, MatchSummary, NegotiationView, TrickView};
use crate::domain::scoring::score_deal;
use crate::domain::state::{DealState, MatchState};
use crate::domain::{Card, DealResult, Deck, Seat};
use crate::error::EngineError;


/// Safety limit on deals per match; prevents a non-terminating match when
/// every deal scores zero or is thrown in.
const MAX_DEALS: u32 = 1000;

/// Safety limit on negotiation actions per deal. A legal negotiation is
/// bounded far below this (bids strictly increase and each reset source is
/// finite).
const MAX_NEGOTIATION_ACTIONS: u32 = 64;

/// Cards handed to each seat before and after negotiation.
const FIRST_DISTRIBUTION: usize = 5;
const SECOND_DISTRIBUTION: usize = 3;

/// Disposition of a deal in which all four seats passed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NoContractPolicy {
    /// Throw the deal in and redeal under the next dealer.
    Redeal,
    /// Abandon the match with an error for the caller.
    Abort,
}

#[derive(Debug, Copy, Clone)]
pub struct MatchConfig {
    /// Match points a team must reach to win the match.
    pub target_score: u16,
    pub no_contract_policy: NoContractPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_score: 151,
            no_contract_policy: NoContractPolicy::Redeal,
        }
    }
}

enum DealOutcome {
    Scored(DealResult),
    ThrownIn,
}

/// Drives a full match for four agents seated clockwise from Bottom.
pub struct MatchRunner {
    agents: [Box<dyn PlayerAgent>; 4],
    provider: Box<dyn DeckProvider>,
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(
        agents: [Box<dyn PlayerAgent>; 4],
        provider: Box<dyn DeckProvider>,
        config: MatchConfig,
    ) -> Self {
        Self {
            agents,
            provider,
            config,
        }
    }

    fn agent(&self, seat: Seat) -> &dyn PlayerAgent {
        self.agents[seat.index()].as_ref()
    }

    /// Play deals until a team reaches the target score (or a Colour sweep
    /// ends the match outright). Returns the final match snapshot.
    pub fn run(&self, first_dealer: Seat) -> Result<MatchState, EngineError> {
        let mut state = MatchState::new(self.config.target_score, first_dealer);
        let mut deal_no = 0u32;

        while !state.complete {
            deal_no += 1;
            if deal_no > MAX_DEALS {
                return Err(EngineError::internal(format!(
                    "match exceeded {MAX_DEALS} deals without a winner"
                )));
            }

            let start = DealStartView {
                deal_no,
                dealer: state.dealer,
                match_points: state.match_points,
                target_score: state.target_score,
            };
            for seat in Seat::ALL {
                self.agent(seat).deal_started(&start);
            }

            match self.play_deal(&state)? {
                DealOutcome::Scored(result) => {
                    info!(
                        deal = deal_no,
                        mode = ?result.mode,
                        multiplier = ?result.multiplier,
                        match_points = ?result.match_points,
                        sweep = ?result.sweep,
                        "deal scored"
                    );
                    for seat in Seat::ALL {
                        self.agent(seat).deal_ended(&result);
                    }
                    state = state.with_deal(result);
                }
                DealOutcome::ThrownIn => match self.config.no_contract_policy {
                    NoContractPolicy::Redeal => {
                        info!(deal = deal_no, "all passed, deal thrown in");
                        state = state.with_redeal();
                    }
                    NoContractPolicy::Abort => {
                        return Err(EngineError::abandoned(
                            "negotiation ended with no contract",
                        ))
                    }
                },
            }
        }

        info!(
            winner = ?state.winner,
            match_points = ?state.match_points,
            deals = state.deals.len(),
            "match complete"
        );
        let summary = MatchSummary::of(&state);
        for seat in Seat::ALL {
            self.agent(seat).match_ended(&summary);
        }
        Ok(state)
    }

    /// One deal: cut, distribute, negotiate, distribute, play, score.
    fn play_deal(&self, match_state: &MatchState) -> Result<DealOutcome, EngineError> {
        let dealer = match_state.dealer;
        let deck = self.provider.provide();
        deck.ensure_full()?;

        // Cut by the seat to the dealer's right.
        let cutter = dealer.prev();
        let cut_view = CutView {
            seat: cutter,
            dealer,
            deck_size: deck.len(),
            match_points: match_state.match_points,
            target_score: match_state.target_score,
        };
        let choice = self
            .agent(cutter)
            .choose_cut(&cut_view)
            .map_err(|e| EngineError::agent(cutter, "cut", e))?;
        let deck = deck
            .cut(choice.count, choice.from_top)
            .map_err(|e| EngineError::protocol(cutter, e.to_string()))?;

        // First distribution, clockwise from the dealer's left.
        let (mut hands, deck) = Self::distribute(deck, dealer, FIRST_DISTRIBUTION)?;

        // Negotiation.
        let contract = match self.negotiate(match_state, dealer, &hands)? {
            NegotiationOutcome::AllPassed => return Ok(DealOutcome::ThrownIn),
            NegotiationOutcome::Contract(contract) => contract,
        };

        // Second distribution completes the hands.
        let (second, _rest) = Self::distribute(deck, dealer, SECOND_DISTRIBUTION)?;
        for (hand, extra) in hands.iter_mut().zip(second) {
            hand.extend(extra);
        }

        // Trick play.
        let mut deal = DealState::new(dealer, contract, hands);
        while let Some(who) = deal.turn() {
            let legal = deal.legal_plays_for(who);
            if legal.is_empty() {
                return Err(EngineError::internal(
                    "no legal play for a seat holding cards",
                ));
            }
            let view = TrickView::for_seat(who, &deal, match_state);
            let card = self
                .agent(who)
                .choose_card(&view, &legal)
                .map_err(|e| EngineError::agent(who, "play", e))?;
            if !legal.contains(&card) {
                return Err(EngineError::protocol(
                    who,
                    format!("card {card:?} is outside the offered legal set"),
                ));
            }
            deal = deal.play_card(who, card)?;
            debug!(seat = ?who, card = ?card, "card played");
        }

        let result = score_deal(
            deal.contract.mode,
            deal.contract.multiplier,
            deal.contract.announcer,
            deal.card_points,
            deal.sweep(),
        );
        Ok(DealOutcome::Scored(result))
    }

    /// Hand `count` cards to each seat, clockwise from the dealer's left.
    fn distribute(
        deck: Deck,
        dealer: Seat,
        count: usize,
    ) -> Result<([Vec<Card>; 4], Deck), EngineError> {
        let mut hands: [Vec<Card>; 4] = Default::default();
        let mut rest = deck;
        for i in 0..4 {
            let seat = dealer.next().nth_next(i);
            let (cards, remainder) = rest.deal(count)?;
            hands[seat.index()] = cards;
            rest = remainder;
        }
        Ok((hands, rest))
    }

    /// Run the negotiation to completion, offering each turn seat its legal
    /// set and applying the (ownership-validated) response.
    fn negotiate(
        &self,
        match_state: &MatchState,
        dealer: Seat,
        hands: &[Vec<Card>; 4],
    ) -> Result<NegotiationOutcome, EngineError> {
        let mut negotiation = NegotiationState::new(dealer.next());
        let mut actions = 0u32;
        while !negotiation.is_complete() {
            actions += 1;
            if actions > MAX_NEGOTIATION_ACTIONS {
                return Err(EngineError::internal(format!(
                    "negotiation exceeded {MAX_NEGOTIATION_ACTIONS} actions"
                )));
            }
            let who = negotiation.turn();
            let legal = negotiation.legal_actions();
            debug_assert!(!legal.is_empty(), "open negotiation offers no actions");
            let view = NegotiationView {
                seat: who,
                dealer,
                hand: hands[who.index()].clone(),
                history: negotiation.history().to_vec(),
                current_bid: negotiation.current_bid(),
                match_points: match_state.match_points,
                target_score: match_state.target_score,
            };
            let action = self
                .agent(who)
                .choose_action(&view, &legal)
                .map_err(|e| EngineError::agent(who, "negotiation", e))?;
            if !legal.contains(&action) {
                return Err(EngineError::protocol(
                    who,
                    format!("action {action:?} is outside the offered legal set"),
                ));
            }
            negotiation = negotiation.apply(who, action)?;
            debug!(seat = ?who, action = ?action, "negotiation action");
        }
        negotiation
            .outcome()
            .ok_or_else(|| EngineError::internal("complete negotiation has no outcome"))
    }
}
