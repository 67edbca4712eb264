use std::sync::Arc;

use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::{future, ProvideCredentials, SharedCredentialsProvider};

use crate::aws::client::{AwsClientFactory, ClientFactory, FactoryError, KinesisClient};
use crate::credentials::CredentialsSource;
use crate::settings::ClientSettings;
use crate::sink::capture::MemorySink;

fn static_creds() -> CredentialsSource {
    CredentialsSource::from_keys("AKIDEXAMPLE", "wJalrXUtnFEMI", None)
}

#[derive(Debug)]
struct RefusingProvider;

impl ProvideCredentials for RefusingProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(Err(CredentialsError::not_loaded(
            "refusing to produce credentials",
        )))
    }
}

#[tokio::test]
async fn create_client_binds_region() {
    let factory = AwsClientFactory::default();

    let client = factory
        .create_client(&static_creds(), None, "us-west-2")
        .await
        .unwrap();

    assert_eq!(client.region().unwrap().as_ref(), "us-west-2");
}

#[tokio::test]
async fn create_client_logs_display_name_once() {
    let sink = Arc::new(MemorySink::default());
    let factory = AwsClientFactory::new(sink.clone());

    factory
        .create_client(&static_creds(), None, "us-west-2")
        .await
        .unwrap();

    assert_eq!(sink.lines(), vec!["Using US West (Oregon) region"]);
}

#[tokio::test]
async fn create_client_rejects_unknown_region() {
    let sink = Arc::new(MemorySink::default());
    let factory = AwsClientFactory::new(sink.clone());

    let result = factory
        .create_client(&static_creds(), None, "us-nowhere-7")
        .await;

    assert!(matches!(result, Err(FactoryError::UnknownRegion(_))));
    assert!(sink.lines().is_empty());
}

#[tokio::test]
async fn create_client_surfaces_invalid_credentials() {
    let sink = Arc::new(MemorySink::default());
    let factory = AwsClientFactory::new(sink.clone());

    let credentials =
        CredentialsSource::Provider(SharedCredentialsProvider::new(RefusingProvider));

    let result = factory.create_client(&credentials, None, "eu-west-2").await;

    assert!(matches!(result, Err(FactoryError::InvalidCredentials(_))));
    assert_eq!(sink.lines(), vec!["Using Europe (London) region"]);
}

#[tokio::test]
async fn create_client_substitutes_default_settings() {
    let factory = AwsClientFactory::default();

    let explicit = factory
        .create_client(
            &static_creds(),
            Some(ClientSettings::default()),
            "eu-central-1",
        )
        .await
        .unwrap();

    let substituted = factory
        .create_client(&static_creds(), None, "eu-central-1")
        .await
        .unwrap();

    assert_eq!(explicit.region(), substituted.region());
}

#[tokio::test]
async fn concurrent_calls_yield_independent_handles() {
    let factory = AwsClientFactory::default();

    let creds = static_creds();
    let (oregon, frankfurt) = tokio::join!(
        factory.create_client(&creds, None, "us-west-2"),
        factory.create_client(&creds, None, "eu-central-1"),
    );

    assert_eq!(oregon.unwrap().region().unwrap().as_ref(), "us-west-2");
    assert_eq!(frankfurt.unwrap().region().unwrap().as_ref(), "eu-central-1");
}
