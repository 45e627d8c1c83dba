// Shared UI building blocks

mod icons;
mod motion;
mod primitives;

pub use icons::Icon;
pub use motion::Motion;
pub use primitives::{Badge, Card, CardContent, CardHeader, SectionHeading};
