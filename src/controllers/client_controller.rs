//! Controller de clientes

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::{ApiResponse, ClientResponse, CreateClientRequest};
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateClientRequest,
    ) -> AppResult<ApiResponse<ClientResponse>> {
        request.validate()?;

        if self.repository.document_exists(&request.document).await? {
            return Err(conflict_error("Client", "document", &request.document));
        }

        let client = self
            .repository
            .create(request.name, request.email, request.document)
            .await?;

        Ok(ApiResponse::success_with_message(
            ClientResponse::from(client),
            "Cliente registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ClientResponse> {
        let client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client", &id.to_string()))?;

        Ok(ClientResponse::from(client))
    }

    pub async fn list(&self) -> AppResult<Vec<ClientResponse>> {
        let clients = self.repository.list_all().await?;

        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }
}
