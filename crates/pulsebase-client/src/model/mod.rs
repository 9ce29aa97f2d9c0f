pub mod alert;
pub mod entity;
pub mod message;
pub mod metric;
pub mod property;
pub mod sample;
pub mod series;

pub use alert::{Alert, AlertHistory, HistoryType};
pub use entity::{Entity, EntityGroup, InterpolateKind};
pub use message::Message;
pub use metric::{DataType, InvalidAction, Metric, TimePrecision};
pub use property::Property;
pub use sample::{Sample, SampleVersion};
pub use series::Series;
