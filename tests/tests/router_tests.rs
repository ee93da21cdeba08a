//! Rule table under a simulated dispatcher

use meshbus_router::{MatchRule, RuleTable};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Endpoint(u32);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Signal {
    interface: String,
    member: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Rule {
    Interface(String),
    Member(String, String),
}

impl MatchRule<Signal> for Rule {
    fn is_match(&self, signal: &Signal) -> bool {
        match self {
            Rule::Interface(i) => *i == signal.interface,
            Rule::Member(i, m) => *i == signal.interface && *m == signal.member,
        }
    }
}

fn signal(interface: &str, member: &str) -> Signal {
    Signal {
        interface: interface.to_string(),
        member: member.to_string(),
    }
}

/// Endpoints that should receive `signal`, walked under one lock
fn recipients(table: &RuleTable<Endpoint, Rule>, signal: &Signal) -> Vec<Endpoint> {
    let guard = table.lock();
    let mut out: Vec<Endpoint> = Vec::new();
    for (endpoint, rule) in guard.begin() {
        if out.last() != Some(endpoint) && rule.is_match(signal) {
            out.push(*endpoint);
        }
    }
    out
}

#[test]
fn test_dispatch_fan_out() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let table = RuleTable::new();
    table.add_rule(&Endpoint(1), Rule::Interface("chat".into()));
    table.add_rule(&Endpoint(2), Rule::Member("chat".into(), "Join".into()));
    table.add_rule(&Endpoint(3), Rule::Interface("files".into()));
    table.add_rule(&Endpoint(1), Rule::Member("chat".into(), "Join".into()));

    assert_eq!(
        recipients(&table, &signal("chat", "Join")),
        vec![Endpoint(1), Endpoint(2)]
    );
    assert_eq!(recipients(&table, &signal("chat", "Leave")), vec![Endpoint(1)]);
    assert_eq!(recipients(&table, &signal("files", "Put")), vec![Endpoint(3)]);

    table.remove_all_rules(&Endpoint(1)).unwrap();
    assert_eq!(recipients(&table, &signal("chat", "Join")), vec![Endpoint(2)]);
}

#[test]
fn test_readers_and_writers_interleave() {
    let table = Arc::new(RuleTable::new());
    let msg = signal("chat", "Say");

    let writers: Vec<_> = (0..4u32)
        .map(|id| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let endpoint = Endpoint(id);
                let rule = Rule::Interface("chat".into());
                for _ in 0..100 {
                    table.add_rule(&endpoint, rule.clone());
                    table.remove_rule(&endpoint, &rule).unwrap();
                }
                table.add_rule(&endpoint, rule);
            })
        })
        .collect();

    let reader = {
        let table = Arc::clone(&table);
        let msg = msg.clone();
        thread::spawn(move || {
            for _ in 0..200 {
                let guard = table.lock();
                // Each endpoint holds at most one rule at any instant
                for id in 0..4 {
                    assert!(guard.find_rules_for_endpoint(&Endpoint(id)).count() <= 1);
                }
                drop(guard);
                let _ = table.ok_to_send(&msg, &Endpoint(0));
            }
        })
    };

    for handle in writers {
        handle.join().unwrap();
    }
    reader.join().unwrap();

    for id in 0..4 {
        assert!(table.ok_to_send(&msg, &Endpoint(id)));
    }
    assert_eq!(table.len(), 4);
}
