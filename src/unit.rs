use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::trace;

use crate::error::ApiError;
use crate::schemas::AppState;

/// One database transaction owning all reads and writes of a single request.
///
/// The extractor below begins the transaction before the handler body runs.
/// Reads borrow the unit; a mutation consumes it through [`UnitOfWork::commit`],
/// so a request cannot keep writing after its changes are made durable. A unit
/// dropped without commit rolls the whole request back, which covers handler
/// failure, the request timeout and abandoned connections alike.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Begin a fresh unit on the shared connection pool.
    pub async fn begin(state: &AppState) -> Result<Self, ApiError> {
        let txn = state.db.begin().await?;
        trace!("Opened request transaction");
        Ok(Self { txn })
    }

    /// The live transaction, for repository reads and writes.
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Make every write performed through this unit durable.
    pub async fn commit(self) -> Result<(), ApiError> {
        self.txn.commit().await?;
        trace!("Committed request transaction");
        Ok(())
    }
}

#[async_trait]
impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        UnitOfWork::begin(state).await
    }
}
