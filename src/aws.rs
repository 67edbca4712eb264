pub mod client {
    use std::sync::Arc;

    use anyhow::Result;
    use async_trait::async_trait;
    use aws_config::BehaviorVersion;
    use aws_credential_types::provider::error::CredentialsError;
    use aws_credential_types::provider::ProvideCredentials;
    use aws_sdk_kinesis::config::Region;
    use aws_sdk_kinesis::error::SdkError;
    use aws_sdk_kinesis::operation::describe_limits::DescribeLimitsOutput;
    use aws_sdk_kinesis::operation::list_streams::ListStreamsOutput;
    use aws_sdk_kinesis::Client;
    use thiserror::Error;

    use crate::credentials::CredentialsSource;
    use crate::region;
    use crate::settings::ClientSettings;
    use crate::sink::{EventSink, LogSink};

    #[derive(Error, Debug)]
    pub enum FactoryError {
        #[error("credentials source did not yield usable credentials: {0}")]
        InvalidCredentials(#[source] CredentialsError),

        #[error("unknown region [{0}]")]
        UnknownRegion(String),
    }

    #[derive(Clone, Debug)]
    pub struct AwsKinesisClient {
        client: Client,
    }

    /// The narrow surface the rest of the crate sees. Everything downstream
    /// of the factory goes through this trait, never the vendor client.
    #[async_trait]
    pub trait KinesisClient: Sync + Send + Clone {
        async fn describe_limits(&self) -> Result<DescribeLimitsOutput>;

        async fn list_streams(&self, next_token: Option<&str>) -> Result<ListStreamsOutput>;

        fn region(&self) -> Option<&Region>;
    }

    #[async_trait]
    impl KinesisClient for AwsKinesisClient {
        async fn describe_limits(&self) -> Result<DescribeLimitsOutput> {
            self.client
                .describe_limits()
                .send()
                .await
                .map_err(SdkError::into_service_error)
                .map_err(Into::into)
        }

        async fn list_streams(&self, next_token: Option<&str>) -> Result<ListStreamsOutput> {
            let builder = match next_token {
                Some(token) => self.client.list_streams().next_token(token),
                None => self.client.list_streams(),
            };

            builder.send().await.map_err(Into::into)
        }

        fn region(&self) -> Option<&Region> {
            self.client.config().region()
        }
    }

    /// One invocation, one independent handle. The region and credentials
    /// source are fixed at construction time and not mutable afterwards.
    #[async_trait]
    pub trait ClientFactory: Sync + Send {
        type Handle: KinesisClient;

        async fn create_client(
            &self,
            credentials: &CredentialsSource,
            settings: Option<ClientSettings>,
            region: &str,
        ) -> Result<Self::Handle, FactoryError>;
    }

    pub struct AwsClientFactory {
        sink: Arc<dyn EventSink>,
    }

    impl AwsClientFactory {
        pub fn new(sink: Arc<dyn EventSink>) -> AwsClientFactory {
            AwsClientFactory { sink }
        }
    }

    impl Default for AwsClientFactory {
        fn default() -> Self {
            AwsClientFactory::new(Arc::new(LogSink))
        }
    }

    #[async_trait]
    impl ClientFactory for AwsClientFactory {
        type Handle = AwsKinesisClient;

        async fn create_client(
            &self,
            credentials: &CredentialsSource,
            settings: Option<ClientSettings>,
            region: &str,
        ) -> Result<AwsKinesisClient, FactoryError> {
            let region = region::resolve(region)?;

            self.sink
                .info(format!("Using {} region", region.display_name));

            let provider = credentials.resolve().await;

            provider
                .provide_credentials()
                .await
                .map_err(FactoryError::InvalidCredentials)?;

            let settings = settings.unwrap_or_default();

            let shared_config = {
                let inner = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region.id))
                    .credentials_provider(provider);

                let inner = match &settings.endpoint_url {
                    Some(endpoint_url) => inner.endpoint_url(endpoint_url.as_str()),
                    None => inner,
                };

                inner
                    .retry_config(settings.retry_config())
                    .timeout_config(settings.timeout_config())
            }
            .load()
            .await;

            let client = Client::new(&shared_config);

            Ok(AwsKinesisClient { client })
        }
    }
}

#[cfg(test)]
mod tests;
