//! The story: screen text and the six levels of the lamp.

use crate::levels::{DesertRoad, Divisibility, Gate, Relay};
use crate::state::StateId;

pub const TITLE: &str = "Aladdin and the Evil Genie Lamp";

pub const WELCOME: [&str; 2] = [
    "Welcome",
    "Aladdin tried to steal the genie's lamp from Jafar but a spell trapped him inside.",
];

pub const INTRO: &str = "Aladdin is stuck in the lamp. Solve challenges to escape.";

pub const ESCAPE: &str = "Aladdin bursts out of the lamp. Jafar's spell is broken!";

pub const GAME_OVER: &str = "Game over.";

pub const LEVEL_1: Divisibility = Divisibility {
    number: 1,
    on_success: StateId::Level2,
    on_failure: StateId::Level1,
};

pub const LEVEL_2: DesertRoad = DesertRoad {
    number: 2,
    on_success: StateId::Level3,
    on_failure: StateId::Level2,
};

pub const LEVEL_3: Gate = Gate {
    number: 3,
    scene: "A stone door seals the Cave of Wonders. It only moves when told what to do.",
    prompt: "Say the word that moves the door: ",
    keyword: "open",
    reward: "The door grinds open.",
    rebuke: "The door does not budge.",
    on_success: StateId::Level4,
    on_failure: StateId::Level3,
};

pub const LEVEL_4: Relay = Relay {
    number: 4,
    scene: "A magic carpet swoops down and carries Aladdin over the treasure heaps.",
    next: StateId::Level5,
};

pub const LEVEL_5: Gate = Gate {
    number: 5,
    scene: "A sphinx asks: \"I hold a genie, yet I fit in your hand. What am I?\"",
    prompt: "Your answer: ",
    keyword: "lamp",
    reward: "The sphinx bows and lets Aladdin pass.",
    rebuke: "The sphinx roars and the floor drops back into the cave.",
    on_success: StateId::Level6,
    on_failure: StateId::Level3,
};

pub const LEVEL_6: Gate = Gate {
    number: 6,
    scene: "Jafar appears: \"Make your wish, street rat. What do you want most?\"",
    prompt: "Aladdin wishes for: ",
    keyword: "freedom",
    reward: "The lamp shudders. A wish for freedom is the one Jafar cannot refuse.",
    rebuke: "Jafar laughs and grants nothing.",
    on_success: StateId::End,
    on_failure: StateId::Level6,
};
