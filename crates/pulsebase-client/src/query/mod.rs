pub mod alerts;
pub mod messages;
pub mod properties;
pub mod series;
pub mod transform;

pub use alerts::{AlertDelete, AlertHistoryQuery, AlertUpdate, AlertsQuery};
pub use messages::MessagesQuery;
pub use properties::PropertiesQuery;
pub use series::SeriesQuery;
pub use transform::{
    Aggregate, AggregateType, Calendar, Group, Interpolation, Period, Rate, Threshold, TimeUnit,
    WorkingMinutes,
};
