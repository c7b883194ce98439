#![cfg(test)]
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bugscan_common::utils::format;
use bugscan_core::console::MemoryConsole;
use bugscan_core::{Ctx, Job, QueueScanner, ScanSummary};

fn add_hosts(scanner: &mut QueueScanner, count: usize) {
    for i in 0..count {
        let host: String = format!("host-{i}.example");
        scanner.add(Job::new(host.clone(), host));
    }
}

/// Reports every job as a success with a fake address.
async fn echo_probe(ctx: Arc<Ctx>, job: Job) {
    let row: String = format::row("10.0.0.1", job.name());
    ctx.scan_success(row.clone());
    ctx.log(row);
}

#[tokio::test]
async fn attempts_every_job_once_for_any_thread_count() {
    for threads in [1, 64, 150] {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));

        let mut scanner = QueueScanner::new(threads, {
            let calls = calls.clone();
            let seen = seen.clone();
            move |_ctx: Arc<Ctx>, job: Job| {
                calls.fetch_add(1, Ordering::SeqCst);
                seen.lock().unwrap().push(job.name().to_string());
                async {}
            }
        })
        .with_console(MemoryConsole::new());
        add_hosts(&mut scanner, 150);

        let summary: ScanSummary = scanner.start().await;

        assert_eq!(summary.attempted, 150, "threads = {threads}");
        assert_eq!(calls.load(Ordering::SeqCst), 150, "threads = {threads}");

        let mut seen: Vec<String> = seen.lock().unwrap().clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 150, "a job ran twice with threads = {threads}");
    }
}

#[tokio::test]
async fn never_exceeds_thread_count() {
    const THREADS: usize = 5;
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let mut scanner = QueueScanner::new(THREADS, {
        let active = active.clone();
        let peak = peak.clone();
        move |_ctx: Arc<Ctx>, _job: Job| {
            let active = active.clone();
            let peak = peak.clone();
            async move {
                let now: usize = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                active.fetch_sub(1, Ordering::SeqCst);
            }
        }
    })
    .with_console(MemoryConsole::new());
    add_hosts(&mut scanner, 60);

    scanner.start().await;

    let peak: usize = peak.load(Ordering::SeqCst);
    assert!(peak >= 1);
    assert!(peak <= THREADS, "{peak} probes ran at once");
}

#[tokio::test]
async fn console_and_output_file_hold_identical_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.txt");
    let console = MemoryConsole::new();

    let mut scanner = QueueScanner::new(8, echo_probe).with_console(console.clone());
    add_hosts(&mut scanner, 40);
    scanner.set_output_file(&path);

    let summary: ScanSummary = scanner.start().await;

    let mut on_screen: Vec<String> = console.lines();
    let mut in_file: Vec<String> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    let mut collected: Vec<String> = summary.successes.clone();
    on_screen.sort();
    in_file.sort();
    collected.sort();

    assert_eq!(in_file.len(), 40);
    assert_eq!(on_screen, in_file);
    assert_eq!(collected, in_file);
}

#[tokio::test]
async fn output_file_grows_with_every_success() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.txt");
    let observed = Arc::new(Mutex::new(Vec::<usize>::new()));

    let mut scanner = QueueScanner::new(1, {
        let path = path.clone();
        let observed = observed.clone();
        move |ctx: Arc<Ctx>, job: Job| {
            ctx.scan_success(format::row("10.0.0.1", job.name()));
            let rows: usize = fs::read_to_string(&path).map(|c| c.lines().count()).unwrap_or(0);
            observed.lock().unwrap().push(rows);
            async {}
        }
    })
    .with_console(MemoryConsole::new());
    add_hosts(&mut scanner, 5);
    scanner.set_output_file(&path);

    scanner.start().await;

    assert_eq!(*observed.lock().unwrap(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn unwritable_output_keeps_results_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("save.txt");
    let console = MemoryConsole::new();

    let mut scanner = QueueScanner::new(4, echo_probe).with_console(console.clone());
    add_hosts(&mut scanner, 10);
    scanner.set_output_file(&path);

    let summary: ScanSummary = scanner.start().await;

    assert_eq!(summary.successes.len(), 10);
    assert_eq!(console.lines().len(), 10);
    assert!(!path.exists());
}

#[tokio::test]
async fn crashing_probe_loses_only_its_own_job() {
    let mut scanner = QueueScanner::new(3, |ctx: Arc<Ctx>, job: Job| async move {
        if job.name() == "host-7.example" {
            panic!("unexpected fault");
        }
        echo_probe(ctx, job).await;
    })
    .with_console(MemoryConsole::new());
    add_hosts(&mut scanner, 20);

    let summary: ScanSummary = scanner.start().await;

    assert_eq!(summary.attempted, 20);
    assert_eq!(summary.faulted, 1);
    assert_eq!(summary.successes.len(), 19);
    assert!(!summary.successes.iter().any(|row| row.contains("host-7.example")));
}
