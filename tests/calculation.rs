use leverage_calculator::{calculate, CalculatorInputs, PositionType};

fn inputs(balance: &str, risk: &str, entry: &str, stop: &str) -> CalculatorInputs {
    CalculatorInputs {
        balance: balance.to_string(),
        risk_amount: risk.to_string(),
        entry_price: entry.to_string(),
        stop_loss_price: stop.to_string(),
    }
}

#[test]
fn rounded_leverage_is_always_the_ceiling() {
    let cases = [
        ("20", "1", "2", "1"),
        ("1000", "25", "64000", "63000"),
        ("50", "2", "1.2345", "1.2200"),
        ("10", "3", "3000", "3100"),
        ("75", "7.5", "10", "9.5"),
    ];

    for (b, r, e, s) in cases {
        let res = calculate(&inputs(b, r, e, s)).unwrap();
        assert_eq!(res.rounded_leverage, res.leverage.ceil(), "case {:?}", (b, r, e, s));
        assert_eq!(
            res.shows_adjustment(),
            res.leverage.fract() != 0.0,
            "case {:?}",
            (b, r, e, s)
        );
    }
}

#[test]
fn direction_follows_stop_placement() {
    let long = calculate(&inputs("100", "1", "10", "9")).unwrap();
    let short = calculate(&inputs("100", "1", "10", "11")).unwrap();

    assert_eq!(long.position_type, PositionType::Long);
    assert_eq!(short.position_type, PositionType::Short);
    // same distance, same size either way
    assert!((long.position_size - short.position_size).abs() < 1e-9);
}

#[test]
fn entry_equal_to_stop_never_yields_a_result() {
    for (b, r) in [("1", "1"), ("100", "10"), ("1e9", "0.01")] {
        assert!(calculate(&inputs(b, r, "50", "50")).is_none());
    }
}

#[test]
fn json_shape_matches_the_result_panel_fields() {
    let res = calculate(&inputs("20", "1", "2", "1")).unwrap();
    let v = serde_json::to_value(&res).unwrap();

    assert_eq!(v["positionType"], "LONG");
    assert_eq!(v["roundedLeverage"], 1.0);
    for key in [
        "leverage",
        "positionSize",
        "riskPercent",
        "adjustedBalance",
        "adjustedPositionSize",
    ] {
        assert!(v.get(key).is_some(), "missing {}", key);
    }

    let none: Option<&leverage_calculator::CalculationResult> = None;
    assert_eq!(serde_json::to_string(&none).unwrap(), "null");
}
