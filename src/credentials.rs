use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_credential_types::Credentials;

/// Where the factory obtains authentication material from. Owned by the
/// caller; the factory resolves it to a provider once, at construction time.
#[derive(Debug, Clone)]
pub enum CredentialsSource {
    /// Standard provider chain (environment, shared config files, IMDS).
    DefaultChain,
    /// Named profile from the shared AWS config files.
    Profile(String),
    /// Caller-supplied provider.
    Provider(SharedCredentialsProvider),
}

impl CredentialsSource {
    pub fn from_keys(
        access_key_id: &str,
        secret_access_key: &str,
        session_token: Option<String>,
    ) -> CredentialsSource {
        CredentialsSource::Provider(SharedCredentialsProvider::new(Credentials::new(
            access_key_id,
            secret_access_key,
            session_token,
            None,
            "static",
        )))
    }

    pub async fn resolve(&self) -> SharedCredentialsProvider {
        match self {
            CredentialsSource::DefaultChain => {
                SharedCredentialsProvider::new(DefaultCredentialsChain::builder().build().await)
            }
            CredentialsSource::Profile(name) => SharedCredentialsProvider::new(
                ProfileFileCredentialsProvider::builder()
                    .profile_name(name)
                    .build(),
            ),
            CredentialsSource::Provider(provider) => provider.clone(),
        }
    }
}
