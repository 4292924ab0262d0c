use paynow_qr::{QrGenerator, QrOptions};
use std::thread;

#[test]
fn test_shared_generator_calls_are_isolated() {
    let generator = QrGenerator::new();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let generator = &generator;
                scope.spawn(move || {
                    let options = QrOptions {
                        reference_number: Some(format!("REF-{i}")),
                        uen: (i % 2 == 0).then(|| "123456789A".to_string()),
                        phone: Some("+6591234567".to_string()),
                        ..Default::default()
                    };
                    (0..50)
                        .map(|_| generator.generate(&options).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let payloads = handle.join().unwrap();
            assert!(payloads.windows(2).all(|pair| pair[0] == pair[1]));

            let payload = &payloads[0];
            let reference = format!("REF-{i}");
            assert!(payload.contains(&format!("{:02}{reference}", reference.len())));
            let proxy = if i % 2 == 0 { "010120210123456789A" } else { "010100211+6591234567" };
            assert!(payload.contains(proxy));
        }
    });
}
