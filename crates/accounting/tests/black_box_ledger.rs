use bankledger_accounting::{AccountKind, Ledger, SharedLedger};
use bankledger_core::{AccountNumber, LedgerError};
use bankledger_holders::{Company, Person};

fn init_tracing() {
    // RUST_LOG=debug also shows balance changes.
    bankledger_observability::init();
}

#[test]
fn consumer_account_end_to_end() -> anyhow::Result<()> {
    init_tracing();
    let mut ledger = Ledger::new();

    let n = ledger.open_consumer_account(Person::new(1u32, "Jane", "Roe"), 1234, 500.0);
    assert_eq!(n, AccountNumber::new(1));
    assert!(ledger.authenticate_user(n, 1234)?);

    assert!(!ledger.debit(n, 600.0)?);
    assert_eq!(ledger.balance(n)?, 500.0);

    ledger.credit(n, 100.0)?;
    assert_eq!(ledger.balance(n)?, 600.0);

    assert!(ledger.debit(n, 600.0)?);
    assert_eq!(ledger.balance(n)?, 0.0);
    Ok(())
}

#[test]
fn commercial_account_with_delegates() -> anyhow::Result<()> {
    init_tracing();
    let mut ledger = Ledger::new();

    let consumer = ledger.open_consumer_account(Person::new(1u32, "Jane", "Roe"), 1, 50.0);
    let commercial = ledger.open_commercial_account(Company::new(2u32, "Roe Holdings"), 2, 100.0);
    assert_eq!(commercial, AccountNumber::new(2));

    let clerk = Person::new(3u32, "Sam", "Clerk");
    assert!(!ledger.check_authorized_user(commercial, &clerk)?);
    ledger.add_authorized_user(commercial, clerk.clone())?;
    assert!(ledger.check_authorized_user(commercial, &clerk)?);

    let err = ledger.add_authorized_user(consumer, clerk).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidOperation(_)));

    let report = ledger.average_balance_report();
    assert_eq!(report.get(AccountKind::Commercial), Some(100.0));
    assert_eq!(report.get(AccountKind::Consumer), Some(50.0));
    assert_eq!(
        serde_json::to_value(&report)?,
        serde_json::json!({ "CommercialAccount": 100.0, "ConsumerAccount": 50.0 })
    );
    Ok(())
}

#[test]
fn commercial_only_report_has_no_consumer_entry() -> anyhow::Result<()> {
    init_tracing();
    let mut ledger = Ledger::new();
    ledger.open_commercial_account(Company::new(1u32, "A"), 0, 100.0);
    ledger.open_commercial_account(Company::new(2u32, "B"), 0, 200.0);

    let labels = ledger.average_balance_report().to_label_map();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels.get("CommercialAccount"), Some(&150.0));
    assert!(!labels.contains_key("ConsumerAccount"));
    Ok(())
}

#[test]
fn unknown_account_surfaces_as_error() {
    init_tracing();
    let ledger = Ledger::new();
    let err = ledger.balance(AccountNumber::new(5)).unwrap_err();
    assert_eq!(err.to_string(), "account not found: 5");
}

#[test]
fn shared_ledger_behaves_like_ledger() -> anyhow::Result<()> {
    init_tracing();
    let shared = SharedLedger::new();

    let n = shared.open_consumer_account(Person::new(1u32, "Jane", "Roe"), 1234, 500.0)?;
    assert!(!shared.debit(n, 600.0)?);
    shared.credit(n, 100.0)?;
    assert!(shared.debit(n, 600.0)?);
    assert_eq!(shared.balance(n)?, 0.0);
    Ok(())
}
