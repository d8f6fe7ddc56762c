//! Static text injected into the page at start.

/// Global stylesheet appended to `<head>`: keyframes used by inline animations
/// and crisp pixel rendering for images.
pub const GLOBAL_STYLESHEET: &str = r"
    @keyframes retroGlitch {
        0% { transform: translateX(0); }
        20% { transform: translateX(-2px); }
        40% { transform: translateX(2px); }
        60% { transform: translateX(-1px); }
        80% { transform: translateX(1px); }
        100% { transform: translateX(0); }
    }

    @keyframes retroBlink {
        0%, 50% { opacity: 1; }
        51%, 100% { opacity: 0; }
    }

    @keyframes retroFloat {
        0%, 100% { transform: translateY(0px); }
        50% { transform: translateY(-1px); }
    }

    img, svg {
        image-rendering: pixelated;
        image-rendering: -moz-crisp-edges;
        image-rendering: crisp-edges;
    }
";

/// Inline style of the progress bar element at creation.
pub const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
    background: linear-gradient(90deg, #78BEBA, #2069af, #E7B225, #D35233); \
    z-index: 1001; transition: width 0.1s ease; image-rendering: pixelated;";

pub const CONSOLE_BANNER: &str = "
╔══════════════════════════════════════╗
║  ECHO BRIDGE MANUAL v2.0             ║
║  ──────────────────────────────────  ║
║  LUFS Audio - Retro Edition          ║
║                                      ║
║  Keyboard shortcuts:                 ║
║  Ctrl + ↑  : Scroll to top           ║
║  Ctrl + ↓  : Scroll to bottom        ║
╚══════════════════════════════════════╝
";
