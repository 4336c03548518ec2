/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 8.0; // pixels per frame
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and side wall

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SERVE_SPEED: f32 = 5.0; // |speed_x| after every reset
    pub const BALL_SERVE_SPREAD: f32 = 5.0; // speed_y drawn from [-spread, spread)
    pub const BALL_SPEED_INCREMENT: f32 = 0.5; // added per axis on paddle hit
    pub const BALL_SPEED_MAX: f32 = 15.0; // per axis

    // AI
    pub const AI_DEADZONE: f32 = 35.0;
    pub const AI_SKIP_CHANCE: f64 = 0.2;

    // Cosmetic timings
    pub const BALL_GLOW_MS: u32 = 300;
    pub const IMPACT_FLASH_MS: u32 = 120;
    pub const IMPACT_RADIUS: f32 = 30.0;
}
