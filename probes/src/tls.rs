//! TLS client setup for reachability probing.
//!
//! The handshake is used to observe whether a host answers under a given SNI,
//! not to establish trust, so certificate chains and names are never checked.
//! Handshake signatures are still verified against the presented key.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::client::TlsStream;
use tokio_rustls::rustls::client::danger::{
    HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
};
use tokio_rustls::rustls::crypto::{
    self, CryptoProvider, verify_tls12_signature, verify_tls13_signature,
};
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use tokio_rustls::rustls::{self, ClientConfig, DigitallySignedStruct, SignatureScheme};
use tokio_rustls::TlsConnector;

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("invalid TLS client configuration: {0}")]
    Config(#[from] rustls::Error),
    #[error("'{0}' is not a valid server name")]
    ServerName(String),
    #[error("TLS handshake timed out")]
    Timeout,
    #[error("TLS handshake failed: {0}")]
    Handshake(#[from] io::Error),
}

#[derive(Debug)]
struct AcceptAnyCertificate {
    provider: Arc<CryptoProvider>,
}

impl ServerCertVerifier for AcceptAnyCertificate {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}

/// Builds a connector that accepts any server certificate.
///
/// Only the AEAD cipher suites of the ring provider are offered. Servers that
/// accept nothing but legacy CBC suites fail the handshake and are reported
/// as negatives.
pub fn insecure_connector() -> Result<TlsConnector, TlsError> {
    let provider: Arc<CryptoProvider> = Arc::new(crypto::ring::default_provider());
    let config: ClientConfig = ClientConfig::builder_with_provider(provider.clone())
        .with_safe_default_protocol_versions()?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyCertificate { provider }))
        .with_no_client_auth();

    Ok(TlsConnector::from(Arc::new(config)))
}

/// Runs a client handshake over `stream` presenting `server_name`, bounded by `limit`.
///
/// Dropping the handshake future on timeout cancels it and closes the socket.
pub async fn handshake(
    connector: &TlsConnector,
    stream: TcpStream,
    server_name: &str,
    limit: Duration,
) -> Result<TlsStream<TcpStream>, TlsError> {
    let name: ServerName<'static> = ServerName::try_from(server_name.to_string())
        .map_err(|_| TlsError::ServerName(server_name.to_string()))?;

    match timeout(limit, connector.connect(name, stream)).await {
        Ok(Ok(tls_stream)) => Ok(tls_stream),
        Ok(Err(e)) => Err(TlsError::Handshake(e)),
        Err(_elapsed) => Err(TlsError::Timeout),
    }
}
