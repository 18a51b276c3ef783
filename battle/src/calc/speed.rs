//! Turn-order calculator

use crate::types::StatStages;

/// Speed inputs for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeedSpec {
    /// Calculated speed stat
    pub speed: u32,

    /// Speed stage (-6 to +6)
    pub stage: i8,

    pub paralyzed: bool,
    pub choice_scarf: bool,
    pub tailwind: bool,

    /// Priority of the intended move
    pub priority: i8,
}

impl SpeedSpec {
    pub fn new(speed: u32) -> Self {
        Self {
            speed,
            ..Default::default()
        }
    }

    /// Speed after every modifier, floored after each step
    ///
    /// Order: stage, Choice Scarf (x1.5), paralysis (x0.5), tailwind (x2).
    pub fn effective_speed(&self) -> u32 {
        let mut speed = StatStages::apply(self.speed, self.stage);
        if self.choice_scarf {
            speed = speed.saturating_mul(3) / 2;
        }
        if self.paralyzed {
            speed /= 2;
        }
        if self.tailwind {
            speed = speed.saturating_mul(2);
        }
        speed
    }
}

/// Which side acts first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOrder {
    Attacker,
    Defender,
    /// Equal speed and priority: the game picks at random
    Tie,
}

/// What decided the order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderReason {
    Priority,
    Speed,
    TrickRoom,
    Tie,
}

impl OrderReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderReason::Priority => "priority",
            OrderReason::Speed => "speed",
            OrderReason::TrickRoom => "trick room",
            OrderReason::Tie => "speed tie",
        }
    }
}

/// Turn order with the speeds that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrderResult {
    pub order: TurnOrder,
    pub attacker_speed: u32,
    pub defender_speed: u32,
    pub reason: OrderReason,
}

impl TurnOrderResult {
    pub fn attacker_first(&self) -> bool {
        self.order == TurnOrder::Attacker
    }

    pub fn is_tie(&self) -> bool {
        self.order == TurnOrder::Tie
    }
}

impl std::fmt::Display for TurnOrderResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.order {
            TurnOrder::Attacker => "moves first",
            TurnOrder::Defender => "moves second",
            TurnOrder::Tie => "speed tie",
        };
        write!(
            f,
            "{label} ({} vs {}, by {})",
            self.attacker_speed,
            self.defender_speed,
            self.reason.as_str()
        )
    }
}

/// Decide which side acts first
///
/// Higher priority always goes first. With equal priority the faster side
/// goes first, or the slower side under Trick Room. Equal effective speeds
/// are reported as a tie.
pub fn turn_order(
    attacker: &SpeedSpec,
    defender: &SpeedSpec,
    trick_room: bool,
) -> TurnOrderResult {
    let attacker_speed = attacker.effective_speed();
    let defender_speed = defender.effective_speed();

    let (order, reason) = if attacker.priority != defender.priority {
        let order = if attacker.priority > defender.priority {
            TurnOrder::Attacker
        } else {
            TurnOrder::Defender
        };
        (order, OrderReason::Priority)
    } else if attacker_speed == defender_speed {
        (TurnOrder::Tie, OrderReason::Tie)
    } else {
        let attacker_faster = attacker_speed > defender_speed;
        let attacker_first = attacker_faster != trick_room;
        let order = if attacker_first {
            TurnOrder::Attacker
        } else {
            TurnOrder::Defender
        };
        let reason = if trick_room {
            OrderReason::TrickRoom
        } else {
            OrderReason::Speed
        };
        (order, reason)
    };

    TurnOrderResult {
        order,
        attacker_speed,
        defender_speed,
        reason,
    }
}
