//! Sliding movement and collision resolution.
//!
//! A slide lifts the mover off the grid, walks it square by square along a
//! direction, and puts it back down on the last free square it entered (or
//! leaves it off the board if it fell). Hazards knocked loose by a penguin are
//! resolved with the same walk right after the penguin settles.

use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    CollisionRule, ConsistencyError, Direction, Food, GameState, HazardError, HazardId,
    HazardKind, Occupant, PenguinId, PenguinKind, PenguinStatus, Position, SpecialState,
};

/// Anything that can slide across the ice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mover {
    Penguin(PenguinId),
    Hazard(HazardId),
}

/// Effect applied when a mover runs into a hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CollisionEffect {
    /// Heavy ice block took the lightest food item, if there was one.
    LostFood(Option<Food>),
    /// Light ice block stunned the penguin and was pushed.
    Stunned,
    /// Sea lion bounced the penguin back and was pushed.
    Bounced { into_water: bool },
    FellIntoHole,
    /// A sliding hazard stopped against another hazard.
    Blocked,
}

/// Terminal state of a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SlideOutcome {
    /// Left the board and fell into the water.
    FellOffEdge,
    /// Stopped on the food's square. Penguins collect it; hazards crush it.
    StoppedAtFood { food: Food },
    Collision {
        hazard: HazardId,
        effect: CollisionEffect,
    },
    /// Stopped in front of another penguin, which is left untouched.
    PenguinCollision { other: PenguinId },
    /// A sliding hazard dropped into an open hole and plugged it.
    PluggedHole { hole: HazardId },
    /// King or Emperor special action cut the slide short.
    Halted,
}

/// Everything that happened during one slide.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlideReport {
    pub mover: Mover,
    pub direction: Direction,
    pub start: Position,
    /// Squares entered, in order, including crossed plugged holes.
    pub path: Vec<Position>,
    pub outcome: SlideOutcome,
    /// Resting square, or `None` if the mover left the board.
    pub final_position: Option<Position>,
    /// Food collected along the way (a Royal step can add a second item).
    pub collected: Vec<Food>,
    /// Slide of the hazard this collision set in motion.
    pub pushed: Option<Box<SlideReport>>,
}

/// Slides a penguin, or a slidable hazard, in a direction until it stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideAction {
    pub mover: Mover,
    pub direction: Direction,
    /// Direction of the free step taken first by a Royal penguin with an armed special action.
    pub step: Option<Direction>,
}

impl SlideAction {
    pub fn new(mover: Mover, direction: Direction) -> Self {
        Self {
            mover,
            direction,
            step: None,
        }
    }

    pub fn penguin(penguin: PenguinId, direction: Direction) -> Self {
        Self::new(Mover::Penguin(penguin), direction)
    }

    pub fn with_step(mut self, step: Direction) -> Self {
        self.step = Some(step);
        self
    }
}

impl ActionTransition for SlideAction {
    type Error = SlideError;
    type Result = SlideReport;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        match self.mover {
            Mover::Penguin(id) => {
                let penguin = state.penguin(id).ok_or(SlideError::UnknownPenguin(id))?;
                match penguin.status() {
                    PenguinStatus::Active => {}
                    PenguinStatus::Removed => return Err(SlideError::PenguinRemoved(id)),
                    PenguinStatus::Stunned => return Err(SlideError::PenguinStunned(id)),
                    PenguinStatus::Sliding(_) => return Err(SlideError::AlreadySliding(self.mover)),
                }

                let royal_armed = penguin.kind == PenguinKind::Royal
                    && penguin.special_state() == SpecialState::Armed;
                match (royal_armed, self.step) {
                    (true, None) => return Err(SlideError::MissingStepDirection(id)),
                    (false, Some(_)) => return Err(SlideError::UnexpectedStepDirection(self.mover)),
                    _ => {}
                }

                if state.grid.occupant(penguin.position) != Some(Occupant::Penguin(id)) {
                    return Err(ConsistencyError::PenguinNotOnGrid {
                        penguin: id,
                        position: penguin.position,
                    }
                    .into());
                }
            }
            Mover::Hazard(id) => {
                let hazard = state.hazard(id).ok_or(HazardError::NotFound(id))?;
                if !hazard.active {
                    return Err(SlideError::HazardInactive(id));
                }
                if !hazard.can_slide() {
                    return Err(SlideError::NotSlidable {
                        hazard: id,
                        kind: hazard.kind,
                    });
                }
                if hazard.sliding_direction().is_some() {
                    return Err(SlideError::AlreadySliding(self.mover));
                }
                if self.step.is_some() {
                    return Err(SlideError::UnexpectedStepDirection(self.mover));
                }
            }
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Self::Result, Self::Error> {
        match self.mover {
            Mover::Penguin(id) => slide_penguin(state, config, id, self.direction, self.step),
            Mover::Hazard(id) => slide_hazard(state, id, self.direction),
        }
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        state.validate()?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SlideError {
    #[error("penguin {0} not found")]
    UnknownPenguin(PenguinId),

    #[error("penguin {0} has been removed from the game")]
    PenguinRemoved(PenguinId),

    #[error("penguin {0} is stunned and must skip this turn")]
    PenguinStunned(PenguinId),

    #[error("{0:?} is already sliding")]
    AlreadySliding(Mover),

    #[error("royal penguin {0} needs a step direction for its special action")]
    MissingStepDirection(PenguinId),

    #[error("{0:?} has no armed step to take")]
    UnexpectedStepDirection(Mover),

    #[error("hazard {0} is no longer on the board")]
    HazardInactive(HazardId),

    #[error("hazard {hazard} is a {kind}, which cannot slide")]
    NotSlidable { hazard: HazardId, kind: HazardKind },

    #[error(transparent)]
    #[cfg_attr(feature = "serde", serde(skip))]
    Hazard(#[from] HazardError),

    #[error(transparent)]
    #[cfg_attr(feature = "serde", serde(skip))]
    Inconsistent(#[from] ConsistencyError),
}

impl GameError for SlideError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadySliding(_) | Self::Inconsistent(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPenguin(_) => "SLIDE_UNKNOWN_PENGUIN",
            Self::PenguinRemoved(_) => "SLIDE_PENGUIN_REMOVED",
            Self::PenguinStunned(_) => "SLIDE_PENGUIN_STUNNED",
            Self::AlreadySliding(_) => "SLIDE_ALREADY_SLIDING",
            Self::MissingStepDirection(_) => "SLIDE_MISSING_STEP",
            Self::UnexpectedStepDirection(_) => "SLIDE_UNEXPECTED_STEP",
            Self::HazardInactive(_) => "SLIDE_HAZARD_INACTIVE",
            Self::NotSlidable { .. } => "SLIDE_NOT_SLIDABLE",
            Self::Hazard(_) => "SLIDE_HAZARD",
            Self::Inconsistent(_) => "SLIDE_INCONSISTENT",
        }
    }
}

/// Slide behavior unlocked by an armed special action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Modifier {
    HaltAfter(usize),
    Step(Direction),
    Jump,
}

/// Squares visited by a mover. `rest` only advances on squares it may stop on.
struct Trail {
    current: Position,
    rest: Position,
    path: Vec<Position>,
}

impl Trail {
    fn new(start: Position) -> Self {
        Self {
            current: start,
            rest: start,
            path: Vec::new(),
        }
    }

    fn enter(&mut self, position: Position) {
        self.current = position;
        self.rest = position;
        self.path.push(position);
    }

    /// Passes over a plugged hole, which cannot be a resting square.
    fn cross(&mut self, position: Position) {
        self.current = position;
        self.path.push(position);
    }
}

struct PenguinSlide<'s> {
    state: &'s mut GameState,
    id: PenguinId,
    trail: Trail,
    collected: Vec<Food>,
    jump_ready: bool,
    stunned: bool,
    gone: bool,
    /// Hazard set in motion and the direction it was hit from.
    pushed: Option<(HazardId, Direction)>,
}

fn slide_penguin(
    state: &mut GameState,
    config: &GameConfig,
    id: PenguinId,
    direction: Direction,
    step: Option<Direction>,
) -> Result<SlideReport, SlideError> {
    let penguin = state.penguin_mut(id).ok_or(SlideError::UnknownPenguin(id))?;
    let start = penguin.position;

    let modifier = if penguin.special_state() == SpecialState::Armed {
        let modifier = match penguin.kind {
            PenguinKind::King => Modifier::HaltAfter(usize::from(config.king_halt_after)),
            PenguinKind::Emperor => Modifier::HaltAfter(usize::from(config.emperor_halt_after)),
            PenguinKind::Royal => Modifier::Step(step.ok_or(SlideError::MissingStepDirection(id))?),
            PenguinKind::Rockhopper => Modifier::Jump,
        };
        penguin.consume_special();
        Some(modifier)
    } else {
        None
    };

    penguin.start_sliding(direction);
    state.grid.remove(start);
    tracing::debug!(penguin = %id, %start, %direction, ?modifier, "penguin slide started");

    let mut slide = PenguinSlide {
        state,
        id,
        trail: Trail::new(start),
        collected: Vec::new(),
        jump_ready: modifier == Some(Modifier::Jump),
        stunned: false,
        gone: false,
        pushed: None,
    };
    let halt_after = match modifier {
        Some(Modifier::HaltAfter(limit)) => Some(limit),
        _ => None,
    };

    let outcome = 'slide: {
        if let Some(Modifier::Step(step_direction)) = modifier {
            if let Some(outcome) = slide.step(step_direction)? {
                break 'slide outcome;
            }
        }

        loop {
            if let Some(outcome) = slide.advance(direction)? {
                break 'slide outcome;
            }
            if halt_after.is_some_and(|limit| slide.trail.path.len() >= limit) {
                tracing::debug!(penguin = %id, squares = slide.trail.path.len(), "special action halted slide");
                break 'slide SlideOutcome::Halted;
            }
        }
    };

    slide.finish(direction, start, outcome)
}

impl PenguinSlide<'_> {
    /// Evaluates the next square in `direction`. Returns the outcome if the slide ends there.
    fn advance(&mut self, direction: Direction) -> Result<Option<SlideOutcome>, SlideError> {
        let candidate = self.trail.current.next(direction);
        tracing::trace!(penguin = %self.id, %candidate, "evaluating square");

        if !self.state.grid.contains(candidate) {
            self.gone = true;
            return Ok(Some(SlideOutcome::FellOffEdge));
        }

        match self.state.grid.occupant(candidate) {
            None => {
                self.trail.enter(candidate);
                Ok(None)
            }
            Some(Occupant::Food(food)) => {
                self.pick_up(candidate, food)?;
                Ok(Some(SlideOutcome::StoppedAtFood { food }))
            }
            Some(Occupant::Penguin(other)) => Ok(Some(SlideOutcome::PenguinCollision { other })),
            Some(Occupant::Hazard(hazard)) => match self.rule_of(hazard)? {
                None => {
                    self.trail.cross(candidate);
                    Ok(None)
                }
                Some(_) if self.try_jump(hazard, candidate, direction) => Ok(None),
                Some(rule) => self.collide(hazard, rule, direction).map(Some),
            },
        }
    }

    /// Royal special action: one square in `direction` before the slide proper.
    fn step(&mut self, direction: Direction) -> Result<Option<SlideOutcome>, SlideError> {
        let candidate = self.trail.current.next(direction);
        tracing::debug!(penguin = %self.id, %candidate, "royal step");

        if !self.state.grid.contains(candidate) {
            self.gone = true;
            return Ok(Some(SlideOutcome::FellOffEdge));
        }

        match self.state.grid.occupant(candidate) {
            None => self.trail.enter(candidate),
            Some(Occupant::Food(food)) => self.pick_up(candidate, food)?,
            Some(Occupant::Penguin(other)) => {
                tracing::debug!(penguin = %self.id, %other, "royal step blocked");
            }
            Some(Occupant::Hazard(hazard)) => match self.rule_of(hazard)? {
                None => self.trail.cross(candidate),
                Some(rule) => return self.collide(hazard, rule, direction).map(Some),
            },
        }
        Ok(None)
    }

    fn pick_up(&mut self, position: Position, food: Food) -> Result<(), SlideError> {
        self.state
            .penguin_mut(self.id)
            .ok_or(SlideError::UnknownPenguin(self.id))?
            .collect(food);
        self.state.grid.remove(position);
        self.trail.enter(position);
        self.collected.push(food);
        tracing::debug!(penguin = %self.id, %position, kind = %food.kind(), weight = food.weight(), "food collected");
        Ok(())
    }

    fn rule_of(&self, hazard: HazardId) -> Result<Option<CollisionRule>, SlideError> {
        self.state
            .hazard(hazard)
            .map(|hazard| hazard.collision_rule())
            .ok_or(HazardError::NotFound(hazard).into())
    }

    /// Rockhopper special action: hop over the first blocking hazard if the far side is free.
    fn try_jump(&mut self, hazard: HazardId, candidate: Position, direction: Direction) -> bool {
        if !self.jump_ready {
            return false;
        }
        self.jump_ready = false;

        let landing = candidate.next(direction);
        if self.state.grid.is_empty_at(landing) {
            tracing::debug!(penguin = %self.id, %hazard, %landing, "jumped over hazard");
            self.trail.enter(landing);
            true
        } else {
            tracing::debug!(penguin = %self.id, %hazard, %landing, "jump failed, landing blocked");
            false
        }
    }

    fn collide(
        &mut self,
        hazard: HazardId,
        rule: CollisionRule,
        direction: Direction,
    ) -> Result<SlideOutcome, SlideError> {
        let effect = match rule {
            CollisionRule::LoseLightestFood => {
                let penguin = self
                    .state
                    .penguin_mut(self.id)
                    .ok_or(SlideError::UnknownPenguin(self.id))?;
                CollisionEffect::LostFood(penguin.drop_lightest())
            }
            CollisionRule::StunAndPush => {
                self.stunned = true;
                self.pushed = Some((hazard, direction));
                CollisionEffect::Stunned
            }
            CollisionRule::BounceAndPush => {
                self.pushed = Some((hazard, direction));
                // One square back from the square just reached, which may be a
                // crossed hole. A taken target leaves the penguin on `rest`.
                let target = self.trail.current.next(direction.opposite());
                if !self.state.grid.contains(target) {
                    self.gone = true;
                    CollisionEffect::Bounced { into_water: true }
                } else {
                    if self.state.grid.is_empty_at(target) {
                        self.trail.enter(target);
                    }
                    CollisionEffect::Bounced { into_water: false }
                }
            }
            CollisionRule::Fall => {
                self.gone = true;
                CollisionEffect::FellIntoHole
            }
        };
        tracing::debug!(penguin = %self.id, %hazard, ?effect, "collision");
        Ok(SlideOutcome::Collision { hazard, effect })
    }

    fn finish(
        self,
        direction: Direction,
        start: Position,
        outcome: SlideOutcome,
    ) -> Result<SlideReport, SlideError> {
        let rest = self.trail.rest;
        let final_position = (!self.gone).then_some(rest);
        if let Some(position) = final_position {
            self.state
                .grid
                .place(Occupant::Penguin(self.id), position)
                .map_err(ConsistencyError::from)?;
        }

        let status = if self.gone {
            PenguinStatus::Removed
        } else if self.stunned {
            PenguinStatus::Stunned
        } else {
            PenguinStatus::Active
        };
        let penguin = self
            .state
            .penguin_mut(self.id)
            .ok_or(SlideError::UnknownPenguin(self.id))?;
        penguin.position = rest;
        penguin.settle(status);
        tracing::debug!(penguin = %self.id, ?outcome, ?final_position, ?status, "penguin slide finished");

        let pushed = match self.pushed {
            Some((hazard, push)) => Some(Box::new(slide_hazard(self.state, hazard, push)?)),
            None => None,
        };

        Ok(SlideReport {
            mover: Mover::Penguin(self.id),
            direction,
            start,
            path: self.trail.path,
            outcome,
            final_position,
            collected: self.collected,
            pushed,
        })
    }
}

/// Slides a hazard until it stops. Hazards never set anything else in motion.
fn slide_hazard(
    state: &mut GameState,
    id: HazardId,
    direction: Direction,
) -> Result<SlideReport, SlideError> {
    let hazard = state.hazard_mut(id).ok_or(HazardError::NotFound(id))?;
    let start = hazard.position;
    hazard.start_sliding(direction);
    state.grid.remove(start);
    tracing::debug!(%id, %start, %direction, "hazard slide started");

    let mut trail = Trail::new(start);
    let mut gone = false;
    let outcome = loop {
        let candidate = trail.current.next(direction);
        if !state.grid.contains(candidate) {
            gone = true;
            break SlideOutcome::FellOffEdge;
        }

        match state.grid.occupant(candidate) {
            None => trail.enter(candidate),
            Some(Occupant::Food(food)) => {
                state.grid.remove(candidate);
                trail.enter(candidate);
                tracing::debug!(%id, position = %candidate, "food crushed");
                break SlideOutcome::StoppedAtFood { food };
            }
            Some(Occupant::Penguin(other)) => break SlideOutcome::PenguinCollision { other },
            Some(Occupant::Hazard(other)) => {
                let target = state.hazard_mut(other).ok_or(HazardError::NotFound(other))?;
                if target.allows_passage() {
                    trail.cross(candidate);
                } else if target.kind == HazardKind::HoleInIce {
                    target.plug()?;
                    gone = true;
                    break SlideOutcome::PluggedHole { hole: other };
                } else {
                    break SlideOutcome::Collision {
                        hazard: other,
                        effect: CollisionEffect::Blocked,
                    };
                }
            }
        }
    };

    let rest = trail.rest;
    let final_position = (!gone).then_some(rest);
    if let Some(position) = final_position {
        state
            .grid
            .place(Occupant::Hazard(id), position)
            .map_err(ConsistencyError::from)?;
    }
    let hazard = state.hazard_mut(id).ok_or(HazardError::NotFound(id))?;
    hazard.position = rest;
    hazard.active = !gone;
    hazard.stop_sliding();
    tracing::debug!(%id, ?outcome, ?final_position, "hazard slide finished");

    Ok(SlideReport {
        mover: Mover::Hazard(id),
        direction,
        start,
        path: trail.path,
        outcome,
        final_position,
        collected: Vec::new(),
        pushed: None,
    })
}
