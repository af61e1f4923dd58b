use crate::model::{FetchError, WorklistEntry};

#[derive(Debug, Clone)]
pub enum Message {
    FetchWorklist,
    WorklistFetched(Result<Vec<WorklistEntry>, FetchError>),
    StartServer,
    StopServer,
    SendImage,
}
