pub use crate::client::TsdClient;
pub use crate::errors::ClientError;
pub use crate::model::{
    Alert, AlertHistory, DataType, Entity, EntityGroup, HistoryType, InterpolateKind, InvalidAction,
    Message, Metric, Property, Sample, SampleVersion, Series, TimePrecision,
};
pub use crate::query::{
    Aggregate, AggregateType, AlertDelete, AlertHistoryQuery, AlertUpdate, AlertsQuery, Calendar,
    Group, Interpolation, MessagesQuery, Period, PropertiesQuery, Rate, SeriesQuery, Threshold,
    TimeUnit, WorkingMinutes,
};
pub use crate::service::{
    AlertsService, MessageService, MetaService, PropertiesService, SeriesService,
};
pub use pulsebase_net::prelude::{ApiContent, ApiRequest, HttpExec, NetConfig, NetError, ReqwestExec};
pub use pulsebase_types::prelude::{Severity, TimeSpec, Timestamp};
