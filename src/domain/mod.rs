pub mod message;
pub mod scrolly;
pub mod session;

pub use message::{Message, MessageContainer, MessageRole, MessageTree};
pub use scrolly::{
    BarConfig, CenterText, ChartLabel, ChartSection, LineConfig, Margin, PieConfig,
    ScrollyTellData, ScrollyTellSection, SectionData, TextConfig, TextSection, XScaleType,
};
pub use session::{ScrollySession, SessionSeed, ViewType};
