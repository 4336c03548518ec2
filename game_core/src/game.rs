use glam::Vec2;

use crate::components::{Ball, Paddle};
use crate::config::{Config, Side, Theme};
use crate::fsm::{GameAction, GameFsm, FsmState};
use crate::host::Host;
use crate::params::Params;
use crate::render::{Fill, Stroke, Surface, TextAlign, TextStyle};
use crate::resources::{Deferred, Events, GameRng, InputState, Score};
use crate::systems::*;

pub const START_PROMPT: &str = "CLICK TO START";
pub const CONTROLS_HINT: &str = "W / S or \u{2191} / \u{2193} to move";

const CENTER_LINE_COLOR: &str = "rgba(255, 0, 255, 0.3)";
const IMPACT_COLOR: &str = "rgba(255, 0, 255, 0.2)";
const TEXT_GLOW_BLUR: f32 = 10.0;
const SCORE_Y: f32 = 50.0;

/// One local session: the player on the left, the AI on the right
pub struct Game {
    pub config: Config,
    pub theme: Theme,
    pub ball: Ball,
    pub player: Paddle,
    pub ai: Paddle,
    pub score: Score,
    pub input: InputState,
    pub events: Events,
    pub rng: GameRng,
    pub impact: Option<Vec2>, // last paddle contact point (display only)
    fsm: GameFsm,
    pending: Vec<(u32, Deferred)>,
    frames: u64,
}

impl Game {
    pub fn new(config: Config, theme: Theme, seed: u64) -> Self {
        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
        let ball = Ball::new(
            config.ball_spawn(),
            Vec2::splat(config.ball_initial_speed),
            config.ball_radius,
            theme.ball.as_str(),
        );
        let player = Paddle::new(
            config.paddle_spawn(Side::Player),
            paddle_size,
            config.paddle_speed,
            theme.paddle.as_str(),
        );
        let ai = Paddle::new(
            config.paddle_spawn(Side::Ai),
            paddle_size,
            config.paddle_speed,
            theme.paddle.as_str(),
        );

        Self {
            config,
            theme,
            ball,
            player,
            ai,
            score: Score::new(),
            input: InputState::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            impact: None,
            fsm: GameFsm::new(),
            pending: Vec::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    /// Frames simulated since the session started
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Deferred effects queued since the last flush
    pub fn pending(&self) -> &[(u32, Deferred)] {
        &self.pending
    }

    /// Handle the start click. Returns true only on the Idle -> Running edge,
    /// which is when the host should start its frame loop.
    pub fn activate(&mut self, host: &dyn Host) -> bool {
        let result = self.fsm.transition(GameAction::Activate);
        if result.success {
            host.log(format!(
                "session {:?} -> {:?}",
                result.from_state, result.to_state
            ));
        }
        result.success
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self) {
        self.events.clear();
        self.player.settle();
        self.ai.settle();

        // 1. Player input
        apply_player_input(&mut self.player, &self.input, &self.config);

        // 2. AI paddle
        move_ai_paddle(&mut self.ai, &self.ball, &self.config, &mut self.rng);

        // 3. Ball
        move_ball(&mut self.ball, &self.config, &mut self.events);

        // 4. Paddle collisions
        if check_collisions(&mut self.ball, &self.player, &self.ai, &mut self.events).is_some() {
            self.impact = Some(self.ball.pos());
            self.pending
                .push((Params::IMPACT_FLASH_MS, Deferred::ClearImpact));
        }

        // 5. Scoring
        if check_scoring(
            &mut self.ball,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        )
        .is_some()
        {
            self.pending.push((Params::BALL_GLOW_MS, Deferred::ClearBallGlow));
        }

        self.frames += 1;
    }

    /// Hand queued effects to the host and report this frame's points
    pub fn flush(&mut self, host: &dyn Host) {
        for (delay_ms, effect) in self.pending.drain(..) {
            host.schedule_after(delay_ms, effect);
        }

        if let Some(side) = self.events.scored {
            let who = match side {
                Side::Player => "player",
                Side::Ai => "ai",
            };
            host.log(format!("{who} scores, {}", self.score.label()));
        }
    }

    /// Apply a deferred display change. Never touches gameplay state.
    pub fn apply(&mut self, effect: Deferred) {
        match effect {
            Deferred::ClearBallGlow => self.ball.clear_glow(),
            Deferred::ClearImpact => self.impact = None,
        }
    }

    /// One tick of the host loop. Returns whether another frame should be
    /// scheduled.
    pub fn frame(&mut self, host: &dyn Host, surface: &mut dyn Surface) -> bool {
        if self.is_running() {
            self.update();
            self.flush(host);
        }
        self.draw(surface);
        self.is_running()
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let width = self.config.arena_width;
        let height = self.config.arena_height;

        surface.clear(width, height);
        self.draw_center_line(surface);
        self.player.draw(surface);
        self.ai.draw(surface);
        if let Some(at) = self.impact {
            surface.fill_circle(at, Params::IMPACT_RADIUS, &Fill::solid(IMPACT_COLOR));
        }
        self.ball.draw(surface);
        self.draw_score(surface);

        if !self.is_running() {
            self.draw_instructions(surface);
        }
    }

    fn draw_center_line(&self, surface: &mut dyn Surface) {
        let x = self.config.arena_width / 2.0;
        let stroke = Stroke {
            color: CENTER_LINE_COLOR.to_string(),
            width: 2.0,
            dash: vec![10.0, 15.0],
        };
        surface.stroke_line(
            Vec2::new(x, 0.0),
            Vec2::new(x, self.config.arena_height),
            &stroke,
        );
    }

    fn draw_score(&self, surface: &mut dyn Surface) {
        let style = TextStyle {
            font: "32px Orbitron, monospace".to_string(),
            align: TextAlign::Center,
            fill: Fill::glowing(&self.theme.text, &self.theme.paddle, TEXT_GLOW_BLUR),
        };
        surface.fill_text(
            &self.score.label(),
            Vec2::new(self.config.arena_width / 2.0, SCORE_Y),
            &style,
        );
    }

    fn draw_instructions(&self, surface: &mut dyn Surface) {
        let center = self.config.ball_spawn();
        let prompt = TextStyle {
            font: "24px Orbitron, monospace".to_string(),
            align: TextAlign::Center,
            fill: Fill::glowing(&self.theme.text, &self.theme.ball, TEXT_GLOW_BLUR),
        };
        surface.fill_text(START_PROMPT, center, &prompt);

        let hint = TextStyle {
            font: "14px Orbitron, monospace".to_string(),
            align: TextAlign::Center,
            fill: Fill::solid(&self.theme.text),
        };
        surface.fill_text(CONTROLS_HINT, center + Vec2::new(0.0, 40.0), &hint);
    }
}
