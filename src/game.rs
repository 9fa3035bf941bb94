use log::{debug, info, warn};
use rand::Rng;

use crate::difficulty::{Difficulty, DifficultyProfile, cycle, profile_for};
use crate::food::Food;
use crate::grid::{Direction, Grid};
use crate::high_scores::{HighScoreStore, HighScores, StoreError};
use crate::input::{InputEvent, InputQueue, resolve_intent};
use crate::snake::{Advance, DeathReason, Snake};
use crate::theme::Theme;
use crate::variant::{Variant, VariantRules};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// What happened during one call to [`Game::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, nothing moved.
    Idle,
    Moved,
    Ate {
        gained: u32,
    },
    Died {
        reason: DeathReason,
        score: u32,
        new_record: bool,
    },
}

/// One run of the snake, from start to death.
#[derive(Clone, Debug)]
pub struct Session {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            snake: Snake::spawn(grid),
            food: Food::spawn(grid, rng),
            score: 0,
        }
    }
}

pub struct Game {
    variant: Variant,
    difficulty: Difficulty,
    theme: Theme,
    screen: Screen,
    session: Session,
    high_scores: HighScores,
    store: Option<HighScoreStore>,
    intent: Option<Direction>,
}

impl Game {
    /// Loads high scores from `store` when the variant keeps them.
    pub fn new<R: Rng + ?Sized>(variant: Variant, store: Option<HighScoreStore>, rng: &mut R) -> Self {
        let rules = variant.rules();
        let names = rules.difficulty_names();
        let store = store.filter(|_| rules.keeps_high_scores);
        let high_scores = match &store {
            Some(store) => store.load(&names),
            None => HighScores::zeroed(names.iter().copied()),
        };
        let screen = if rules.has_menu { Screen::Menu } else { Screen::Playing };

        Self {
            variant,
            difficulty: rules.default_difficulty,
            theme: rules.themes[0],
            screen,
            session: Session::new(&rules.grid, rng),
            high_scores,
            store,
            intent: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rules(&self) -> &'static VariantRules {
        self.variant.rules()
    }

    pub fn grid(&self) -> &'static Grid {
        &self.rules().grid
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        let rules = self.rules();
        profile_for(rules.profiles, self.difficulty).unwrap_or(&rules.profiles[0])
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn best_score(&self) -> u32 {
        self.high_scores.best(self.difficulty.name())
    }

    /// Switches difficulty if the variant offers it. Returns whether it did.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if profile_for(self.rules().profiles, difficulty).is_none() {
            warn!("{} has no {} difficulty", self.variant, difficulty);
            return false;
        }
        self.difficulty = difficulty;
        true
    }

    /// Applies every queued event in order. Turns are folded into the intent
    /// consumed by the next tick.
    pub fn handle_input<R: Rng + ?Sized>(&mut self, queue: &mut InputQueue, rng: &mut R) {
        for event in queue.drain() {
            self.apply(event, rng);
        }
    }

    fn apply<R: Rng + ?Sized>(&mut self, event: InputEvent, rng: &mut R) {
        match (self.screen, event) {
            (Screen::Playing, InputEvent::Turn(direction)) => {
                self.intent = resolve_intent(self.session.snake.direction(), self.intent, direction);
            }
            (Screen::Menu, InputEvent::Start | InputEvent::Confirm) => self.start(rng),
            (Screen::Menu, InputEvent::CycleDifficulty) => {
                let order: Vec<Difficulty> = self.rules().difficulties().collect();
                self.difficulty = cycle(&order, self.difficulty);
                info!("Difficulty set to {}", self.difficulty);
            }
            (Screen::Menu, InputEvent::CycleTheme) => {
                self.theme = cycle(self.rules().themes, self.theme);
                self.session = Session::new(self.grid(), rng);
                info!("Theme set to {}", self.theme);
            }
            (Screen::Playing, InputEvent::PauseToggle) if self.rules().pausable => {
                self.screen = Screen::Paused;
            }
            (Screen::Paused, InputEvent::PauseToggle | InputEvent::Confirm) => {
                self.screen = Screen::Playing;
            }
            (Screen::Playing | Screen::Paused, InputEvent::Back) if self.rules().has_menu => {
                info!("Abandoned game with score {}", self.session.score);
                self.to_menu(rng);
            }
            (Screen::GameOver, InputEvent::Confirm) => self.to_menu(rng),
            _ => {}
        }
    }

    fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session = Session::new(self.grid(), rng);
        self.intent = None;
        self.screen = Screen::Playing;
        info!("Started {} on {}", self.variant, self.difficulty);
    }

    fn to_menu<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.session = Session::new(self.grid(), rng);
        self.intent = None;
        self.screen = Screen::Menu;
    }

    /// Advances the simulation by one cell while playing.
    ///
    /// A death that sets a record saves the table; a failed save is returned
    /// after the game has already moved to the game-over screen.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TickOutcome, StoreError> {
        if self.screen != Screen::Playing {
            return Ok(TickOutcome::Idle);
        }

        let profile = self.profile();
        let grid = self.grid();

        if let Some(direction) = self.intent.take() {
            self.session.snake.set_direction(direction);
        }

        if let Advance::Dead(reason) = self.session.snake.advance(grid, profile.walls_are_lethal) {
            return self.finish(reason, rng);
        }

        let gained = profile.score_delta(self.rules().base_score);
        let session = &mut self.session;
        if session.snake.head() != session.food.position() {
            return Ok(TickOutcome::Moved);
        }

        session.score += gained;
        session.snake.grow(profile.growth_per_food);
        let eaten = session.food.position();
        let next = session.food.relocate(grid, rng);
        debug!(
            "Ate food at ({}, {}), score {}, next food at ({}, {})",
            eaten.x, eaten.y, session.score, next.x, next.y
        );
        Ok(TickOutcome::Ate { gained })
    }

    fn finish<R: Rng + ?Sized>(&mut self, reason: DeathReason, rng: &mut R) -> Result<TickOutcome, StoreError> {
        let score = self.session.score;
        info!("Snake died ({:?}) with score {}", reason, score);

        if !self.rules().has_menu {
            self.session = Session::new(self.grid(), rng);
            self.intent = None;
            return Ok(TickOutcome::Died {
                reason,
                score,
                new_record: false,
            });
        }

        self.screen = Screen::GameOver;
        let new_record =
            self.rules().keeps_high_scores && self.high_scores.record(self.difficulty.name(), score);
        if new_record {
            info!("New {} record: {}", self.difficulty, score);
            if let Some(store) = &self.store {
                store.save(&self.high_scores)?;
            }
        }

        Ok(TickOutcome::Died {
            reason,
            score,
            new_record,
        })
    }
}
