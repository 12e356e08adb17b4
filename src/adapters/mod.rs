//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements         | Connects to                  |
//! |---------------|--------------------|------------------------------|
//! | `hardware`    | PowerTubePort      | PowerTube driver             |
//! |               | TimerPort          | ThreadTimer (or any timer)   |
//! |               | DisplayPort        | Display driver               |
//! |               | LightPort          | Light driver                 |
//! | `log_sink`    | EventSink          | `log` facade                 |
//! | `text_output` | OutputSink         | stdout / recorder            |

pub mod hardware;
pub mod log_sink;
pub mod text_output;
