use crate::utils::Timer;
use clap::{crate_name, crate_version};
use log::warn;

const LOG_WIDTH: usize = 80;

pub fn write_header() {
    warn!("{: ^LOG_WIDTH$}", "-----------------");
    warn!("{: ^LOG_WIDTH$}", crate_name!().to_uppercase());
    warn!("{: ^LOG_WIDTH$}", "-----------------");
    warn!("{: ^LOG_WIDTH$}", format!("version: {}", crate_version!()));
    warn!("{: ^LOG_WIDTH$}", "");
    warn!("{: ^LOG_WIDTH$}", format!("{::^55}", ""));
    warn!(
        "{: ^LOG_WIDTH$}",
        "::  Decoherence rates and coherence intervals for   ::"
    );
    warn!(
        "{: ^LOG_WIDTH$}",
        "::          trajectory surface hopping              ::"
    );
    warn!(
        "{: ^LOG_WIDTH$}",
        "::  Institute of Physical and Theoretical Chemistry ::"
    );
    warn!(
        "{: ^LOG_WIDTH$}",
        "::              University of Wuerzburg             ::"
    );
    warn!("{: ^LOG_WIDTH$}", format!("{::^55}", ""));
    warn!("{: ^LOG_WIDTH$}", "");
}

pub fn write_footer(timer: Timer) {
    warn!("{}", total_time_line(&timer));
    warn!("{: ^LOG_WIDTH$}", "");
    warn!("{: ^LOG_WIDTH$}", format!("{::^38}", ""));
    warn!("{: ^LOG_WIDTH$}", thank_you_line());
    warn!("{: ^LOG_WIDTH$}", format!("{::^38}", ""));
    warn!("{: ^LOG_WIDTH$}", "");
}

fn total_time_line(timer: &Timer) -> String {
    format!(
        "{:>68} {:>8.2} s",
        "total elapsed time:",
        timer.time.elapsed().as_secs_f32()
    )
}

fn thank_you_line() -> String {
    format!(
        "::   Thank you for using {}    ::",
        crate_name!().to_uppercase()
    )
}
