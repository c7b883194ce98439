#![cfg(test)]
use std::fs;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::time::Duration;

use bugscan_common::utils::format;
use bugscan_core::console::MemoryConsole;
use bugscan_core::{QueueScanner, ScanSummary};
use bugscan_probes::{ping, sni, PingOptions, PingProbe, SniOptions, SniProbe};

use crate::utils::{closed_port, spawn_tcp_server, spawn_tls_server, ScriptedDialer};

fn loopback_hosts(count: usize) -> Vec<String> {
    vec!["127.0.0.1".to_string(); count]
}

async fn run_ping(port: u16, hosts: Vec<String>) -> ScanSummary {
    let probe = PingProbe::new(PingOptions {
        port,
        timeout: Duration::from_secs(2),
    });
    let mut scanner = QueueScanner::new(4, probe).with_console(MemoryConsole::new());
    for job in ping::jobs(hosts) {
        scanner.add(job);
    }
    scanner.start().await
}

fn sni_probe(dialer: ScriptedDialer) -> SniProbe {
    SniProbe::new(SniOptions::default())
        .unwrap()
        .with_dialer(dialer)
        .with_dial_timeout(Duration::from_millis(200))
}

#[tokio::test]
async fn ping_reports_reachable_host() {
    let addr: SocketAddr = spawn_tcp_server().await;

    let summary: ScanSummary = run_ping(addr.port(), loopback_hosts(1)).await;

    assert_eq!(summary.successes, vec![format::row("127.0.0.1", "127.0.0.1")]);
}

#[tokio::test]
async fn ping_stays_silent_on_closed_port() {
    let port: u16 = closed_port().await;

    let summary: ScanSummary = run_ping(port, loopback_hosts(3)).await;

    assert_eq!(summary.attempted, 3);
    assert!(summary.successes.is_empty());
    assert_eq!(summary.faulted, 0);
}

#[tokio::test]
async fn repeated_ping_runs_find_the_same_hosts() {
    let addr: SocketAddr = spawn_tcp_server().await;

    let mut first: Vec<String> = run_ping(addr.port(), loopback_hosts(10)).await.successes;
    let mut second: Vec<String> = run_ping(addr.port(), loopback_hosts(10)).await.successes;
    first.sort();
    second.sort();

    assert_eq!(first.len(), 10);
    assert_eq!(first, second);
}

#[tokio::test]
async fn sni_handshake_succeeds_against_self_signed_server() {
    let addr: SocketAddr = spawn_tls_server().await;
    let console = MemoryConsole::new();

    let mut scanner =
        QueueScanner::new(2, sni_probe(ScriptedDialer::new(0, addr))).with_console(console.clone());
    for job in sni::jobs(vec!["cdn.example.com".to_string()], 0) {
        scanner.add(job);
    }
    let summary: ScanSummary = scanner.start().await;

    let expected: String = format::row("127.0.0.1", "cdn.example.com");
    assert_eq!(summary.successes, vec![expected.clone()]);
    assert_eq!(console.lines(), vec![expected]);
}

#[tokio::test]
async fn sni_recovers_after_two_dial_timeouts() {
    let addr: SocketAddr = spawn_tls_server().await;
    let dialer = ScriptedDialer::new(2, addr);
    let attempts = dialer.attempts.clone();
    let console = MemoryConsole::new();

    let mut scanner = QueueScanner::new(1, sni_probe(dialer)).with_console(console.clone());
    for job in sni::jobs(vec!["slow.example.com".to_string()], 0) {
        scanner.add(job);
    }
    let summary: ScanSummary = scanner.start().await;

    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(summary.successes.len(), 1);
    assert_eq!(
        console.statuses("slow.example.com"),
        vec!["- Dial Timeout (1/3)", "- Dial Timeout (2/3)"]
    );
}

#[tokio::test]
async fn sni_gives_up_after_three_dial_timeouts() {
    let addr: SocketAddr = spawn_tls_server().await;
    let dialer = ScriptedDialer::new(3, addr);
    let attempts = dialer.attempts.clone();

    let mut scanner =
        QueueScanner::new(1, sni_probe(dialer)).with_console(MemoryConsole::new());
    for job in sni::jobs(vec!["dead.example.com".to_string()], 0) {
        scanner.add(job);
    }
    let summary: ScanSummary = scanner.start().await;

    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert!(summary.successes.is_empty());
    assert_eq!(summary.faulted, 0);
}

#[tokio::test]
async fn sni_fails_silently_against_plain_tcp() {
    let addr: SocketAddr = spawn_tcp_server().await;

    let mut scanner = QueueScanner::new(1, sni_probe(ScriptedDialer::new(0, addr)))
        .with_console(MemoryConsole::new());
    for job in sni::jobs(vec!["plain.example.com".to_string()], 0) {
        scanner.add(job);
    }
    let summary: ScanSummary = scanner.start().await;

    assert_eq!(summary.attempted, 1);
    assert!(summary.successes.is_empty());
}

#[tokio::test]
async fn sni_probes_trimmed_names_and_saves_them() {
    let addr: SocketAddr = spawn_tls_server().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sni.txt");

    let hosts: Vec<String> = vec![
        "x.y.z.example.com".to_string(),
        "a.b.example.org".to_string(),
        "localhost".to_string(),
    ];
    let mut scanner = QueueScanner::new(3, sni_probe(ScriptedDialer::new(0, addr)))
        .with_console(MemoryConsole::new());
    for job in sni::jobs(hosts, 2) {
        scanner.add(job);
    }
    scanner.set_output_file(&path);
    scanner.start().await;

    let mut saved: Vec<String> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    saved.sort();

    assert_eq!(
        saved,
        vec![
            format::row("127.0.0.1", "example.com"),
            format::row("127.0.0.1", "example.org"),
            format::row("127.0.0.1", "localhost"),
        ]
    );
}
