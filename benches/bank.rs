use criterion::{criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use std::io::Cursor;
use toy_bank::bank::{Bank, Customer};
use toy_bank::run::{run, Variant};

fn bank_with_accounts(count: usize) -> Bank {
    let mut bank = Bank::new("MyBank", dec!(0.5), 12);
    bank.add_user("Yash_323", "yash323$", "Yash");
    bank.add_customer(Customer::new("Yash", "Pune")).unwrap();
    for _ in 0..count {
        bank.create_account("Yash", dec!(1000)).unwrap();
    }
    bank
}

pub fn bench_transfers_10_000_accounts(c: &mut Criterion) {
    c.bench_function("transfers_10_000_accounts", |b| {
        let mut bank = bank_with_accounts(10_000);

        b.iter(|| {
            for id in 1..10_000 {
                bank.transfer(id, id + 1, dec!(1.5)).unwrap();
                bank.transfer(id + 1, id, dec!(1.5)).unwrap();
            }
        })
    });
}

pub fn bench_console_session_1_000_actions(c: &mut Criterion) {
    c.bench_function("console_session_1_000_actions", |b| {
        let script = format!(
            "Yash\nPune\n100\n0\nYash_323\nyash323$\n{}6\n",
            "1\n1\n2.5\n2\n1\n2.5\n3\n1\n2\n1\n3\n2\n1\n1\nbad choice\n".repeat(200)
        );

        b.iter(|| {
            let mut bank = Bank::new("MyBank", dec!(0.5), 12);
            bank.add_user("Yash_323", "yash323$", "Yash");
            run(
                &mut bank,
                Variant::Basic,
                &mut || "0000".to_string(),
                Cursor::new(script.as_str()),
                std::io::sink(),
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_transfers_10_000_accounts,
    bench_console_session_1_000_actions,
);
criterion_main!(benches);
