//! Phase tracking.
//!
//! After every committed move, [`check_game_state`] advances the coarse
//! [`Phase`] and checks the win/loss conditions tied to where the player now
//! stands.

use log::{info, warn};

use crate::ItemKind;
use crate::item::ItemHolder;
use crate::state::{DeathCause, Ending, GameState, Phase};
use crate::view::View;
use crate::world::WorldModel;

/// Post-move bookkeeping keyed on the player's current location.
pub fn check_game_state(world: &WorldModel, state: &mut GameState, view: &mut View) {
    let marks = &world.landmarks;
    let here = state.current_location.as_str();

    if here == marks.summit {
        if state.phase != Phase::AtSummit {
            state.phase = Phase::AtSummit;
            view.success("You take in the breathtaking view from the top of the world.");
            view.narrative("As you bask in your achievement, you can't help but think about the challenging descent ahead.");
            view.narrative("The journey is only half over, and you'll need all your strength for the way down.");
            info!("phase -> AtSummit");
        }
    } else if here == marks.summit_approach {
        if state.phase == Phase::AtSummit {
            state.phase = Phase::Descending;
            view.info("You've started your descent from the summit. Be careful on your way down.");
            info!("phase -> Descending");
        }
    } else if here == marks.death_zone_camp {
        if !state.has_kind(ItemKind::OxygenTank) {
            view.narrative("You're in the death zone without a full oxygen tank. The lack of oxygen is fatal.");
            view.game_over("Game Over: You didn't survive the climb.");
            warn!("hypoxia at '{here}': no oxygen tank carried");
            state.end(Ending::Death(DeathCause::Hypoxia));
        }
    } else if here == marks.start {
        match state.phase {
            Phase::Descending => {
                view.success("You've successfully returned to Basecamp. Congratulations on your Everest expedition!");
                info!("victory: returned to '{here}' after summiting");
                state.end(Ending::Victory);
            },
            Phase::OnMountain => {
                state.phase = Phase::AtBasecamp;
                info!("phase -> AtBasecamp");
            },
            _ => {},
        }
    } else {
        match state.phase {
            Phase::AtSummit => {
                state.phase = Phase::Descending;
                info!("phase -> Descending");
            },
            Phase::AtBasecamp => {
                state.phase = Phase::OnMountain;
                info!("phase -> OnMountain");
            },
            _ => {},
        }
    }
}
