// DOM hooks shared by the web views.

// Mount point; falls back to <body> when absent
pub const MOUNT_ID: &str = "app";
pub const STYLE_ELEMENT_ID: &str = "olq-styles";

// Keyframes name for confetti particles (defined at runtime from core::confetti)
pub const CONFETTI_KEYFRAMES: &str = "olq-confetti-fall";

// Screen containers
pub const CLASS_SCREEN: &str = "olq-screen";
pub const CLASS_INTRO: &str = "olq-intro";
pub const CLASS_QUESTION: &str = "olq-question";
pub const CLASS_CELEBRATION: &str = "olq-celebration";

// Shared pieces
pub const CLASS_BACKDROP: &str = "olq-backdrop";
pub const CLASS_OUTLINED: &str = "olq-outlined";
pub const CLASS_GIF: &str = "olq-gif";

// Intro
pub const CLASS_INTRO_TEXT: &str = "olq-intro-text";
pub const CLASS_INTRO_HELLO: &str = "olq-intro-hello";
pub const CLASS_INTRO_LOADING: &str = "olq-intro-loading";
pub const CLASS_INTRO_HINT: &str = "olq-intro-hint";
pub const CLASS_INTRO_GIF: &str = "olq-intro-gif";

// Question
pub const CLASS_TITLE: &str = "olq-title";
pub const CLASS_BUTTONS: &str = "olq-buttons";
pub const CLASS_YES: &str = "olq-yes";
pub const CLASS_NO: &str = "olq-no";
pub const CLASS_QUESTION_GIF: &str = "olq-question-gif";

// Celebration
pub const CLASS_HEADLINE: &str = "olq-headline";
pub const CLASS_CONFETTI_LAYER: &str = "olq-confetti";
pub const CLASS_CONFETTI_PIECE: &str = "olq-confetti-piece";
pub const CLASS_CELEBRATION_GIF: &str = "olq-celebration-gif";
