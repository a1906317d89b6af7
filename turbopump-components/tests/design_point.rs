use approx::assert_relative_eq;
use turbopump_components::design::{DesignError, DesignPoint, TurbopumpConfig};
use turbopump_core::constraint::ConstraintError;
use uom::si::{
    length::meter, mass_rate::kilogram_per_second, power::kilowatt, velocity::meter_per_second,
};

/// Oxidizer pump driven by a gas-generator turbine, all values in SI base units.
const LOX_PUMP: &str = r#"
[pump]
pressure_rise = 6.9e6
mass_flow = 23.0
density = 1141.0
efficiency = 0.68

[turbine]
inlet_pressure = 4.5e6
outlet_pressure = 2.5e5
inlet_temperature = 900.0
gamma = 1.24
cp = 2200.0
efficiency = 0.55
"#;

fn load(source: &str) -> TurbopumpConfig {
    toml::from_str(source).expect("design point should deserialize")
}

#[test]
fn lox_pump_design_point() {
    let design = DesignPoint::try_from(load(LOX_PUMP)).unwrap();
    let balance = design.evaluate().unwrap();

    let pump_power_w = 6.9e6 * 23.0 / (1141.0 * 0.68);
    assert_relative_eq!(
        balance.pump_power.get::<kilowatt>(),
        pump_power_w / 1000.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        balance.pump_head.get::<meter>(),
        6.9e6 / (1141.0 * 9.806_65),
        max_relative = 1e-12
    );

    let exponent = (1.24 - 1.0) / 1.24;
    let dh = 2200.0 * 900.0 * (1.0 - (2.5e5_f64 / 4.5e6).powf(exponent));
    assert_relative_eq!(balance.enthalpy_drop.value, dh, max_relative = 1e-12);
    assert_relative_eq!(
        balance.spout_velocity.get::<meter_per_second>(),
        (2.0 * dh).sqrt(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        balance.turbine_mass_flow.get::<kilogram_per_second>(),
        pump_power_w / (0.55 * dh),
        max_relative = 1e-12
    );
}

#[test]
fn config_round_trips_through_toml() {
    let config = load(LOX_PUMP);
    let serialized = toml::to_string(&config).unwrap();
    assert_eq!(load(&serialized), config);
}

#[test]
fn unknown_fields_are_rejected() {
    let source = LOX_PUMP.replace("efficiency = 0.68", "efficiency = 0.68\nspeed = 3000.0");
    assert!(toml::from_str::<TurbopumpConfig>(&source).is_err());
}

#[test]
fn efficiency_above_one_is_rejected() {
    let source = LOX_PUMP.replace("efficiency = 0.55", "efficiency = 1.2");
    let err = DesignPoint::try_from(load(&source)).unwrap_err();

    assert_eq!(
        err,
        DesignError::InvalidParameter {
            field: "turbine.efficiency",
            source: ConstraintError::AboveMaximum,
        }
    );
}
