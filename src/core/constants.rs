// Presentation and timing constants for the card.
//
// Values are tuned by eye; none of the thresholds carry meaning beyond how
// the screen should feel.

// Intro cue offsets (milliseconds after the intro mounts)
pub const INTRO_HELLO_AT_MS: u32 = 2000;
pub const INTRO_LOADING_AT_MS: u32 = 4000;
pub const INTRO_HINT_AT_MS: u32 = 7000;

// Background music
pub const MUSIC_VOLUME: f64 = 0.35;

// Viewport classification
pub const MOBILE_BREAKPOINT: f32 = 640.0;
pub const TABLET_BREAKPOINT: f32 = 768.0;
// used for button sizing when the window reports a zero size
pub const FALLBACK_VIEWPORT_WIDTH: f32 = 360.0;
pub const FALLBACK_VIEWPORT_HEIGHT: f32 = 640.0;

// Yes button
pub const YES_MIN_WIDTH: f32 = 160.0;
pub const YES_MIN_HEIGHT: f32 = 60.0;
pub const YES_HEIGHT_VIEWPORT_SHARE: f32 = 0.6;

// No button
pub const STACK_THRESHOLD: f32 = 0.35; // progress above which buttons stack vertically
pub const NO_BASE_WIDTH: f32 = 140.0;
pub const NO_BASE_HEIGHT: f32 = 56.0;
pub const NO_HEIGHT_PER_STEP: f32 = 10.0;
pub const NO_WIDTH_SHRINK_PER_STEP: f32 = 10.0;
pub const NO_WIDTH_GROW_PER_STEP: f32 = 20.0;
pub const NO_MIN_WIDTH: f32 = 80.0;
pub const NO_MAX_WIDTH: f32 = 260.0;

// Button group
pub const ROW_GAP: f32 = 24.0;
pub const STACK_GAP: f32 = 8.0;

// Vertical rhythm
pub const BUTTONS_TOP_MOBILE: f32 = 112.0;
pub const BUTTONS_TOP_DESKTOP: f32 = 144.0;
pub const TITLE_GAP_MOBILE: f32 = 12.0;
pub const TITLE_GAP_DESKTOP: f32 = 20.0;
pub const TITLE_HEIGHT_SMALL: f32 = 32.0;
pub const TITLE_HEIGHT_MEDIUM: f32 = 40.0;
pub const TITLE_HEIGHT_LARGE: f32 = 48.0;
pub const GIF_GAP_MOBILE_EARLY: f32 = 64.0;
pub const GIF_GAP_MOBILE_LATE: f32 = 40.0;
pub const GIF_GAP_DESKTOP: f32 = 12.0;
pub const GIF_GAP_EARLY_STEPS: usize = 3; // steps below this use the wider mobile gap

// Shrink applied at full progress
pub const TITLE_SHRINK: f32 = 0.15;
pub const GIF_SHRINK: f32 = 0.2;

// Springs (stiffness, damping); damping defaults to SPRING_DEFAULT_DAMPING
pub const SPRING_DEFAULT_DAMPING: f32 = 10.0;
pub const SPRING_DEFAULT_MASS: f32 = 1.0;
pub const TITLE_SPRING_STIFFNESS: f32 = 140.0;
pub const BUTTONS_SPRING: (f32, f32) = (160.0, 18.0);
pub const YES_SPRING: (f32, f32) = (150.0, 20.0);
pub const NO_SPRING: (f32, f32) = (200.0, 18.0);
pub const GIF_SPRING_STIFFNESS: f32 = 120.0;
// a spring counts as settled once both offset and speed drop under these
pub const SPRING_REST_DELTA: f32 = 0.01;
pub const SPRING_REST_SPEED: f32 = 0.01;
// integration substep; large frame gaps are split into steps of this size
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Fades (seconds) and resting opacities
pub const SCREEN_FADE_SEC: f32 = 1.0;
pub const HELLO_FADE_SEC: f32 = 1.0;
pub const LOADING_FADE_SEC: f32 = 0.8;
pub const LOADING_OPACITY: f32 = 0.8;
pub const HINT_FADE_SEC: f32 = 1.0;
pub const HINT_OPACITY: f32 = 0.6;
pub const INTRO_GIF_FADE_SEC: f32 = 1.0;
pub const INTRO_GIF_RISE_PX: f32 = 20.0;

// Confetti
pub const CONFETTI_COUNT: usize = 30;
pub const CONFETTI_MIN_DURATION_SEC: f32 = 3.0;
pub const CONFETTI_DURATION_SPAN_SEC: f32 = 2.0;
pub const CONFETTI_MAX_DELAY_SEC: f32 = 0.5;
pub const CONFETTI_START_Y_PX: f32 = -20.0;
pub const CONFETTI_END_Y_VH: f32 = 110.0;
pub const CONFETTI_PALETTE: [&str; 4] = ["#fb7185", "#f472b6", "#facc15", "#4ade80"];
