use swipeshow_core::{
    slider::{OffStagePose, PoseOffset},
    AnimationEffect, AppConfig,
};

pub fn run(config: &AppConfig) {
    println!("Entrance effects ({}):\n", AnimationEffect::ALL.len());
    println!("    {:<22} {:<16} {:<10} {}", "NAME", "OFFSET", "SCALE", "OPACITY");

    for effect in AnimationEffect::ALL {
        let marker = if effect == config.slider.effect { "*" } else { " " };
        let [offset, scale, opacity] = describe_pose(&effect.pose());
        println!("  {} {:<22} {:<16} {:<10} {}", marker, effect.name(), offset, scale, opacity);
    }

    println!("\n* = configured effect");
}

/// Human-readable offset, scale and opacity of a pose
fn describe_pose(pose: &OffStagePose) -> [String; 3] {
    let offset = match pose.offset {
        Some(PoseOffset { x, y }) => format!("({}w, {}h)", x, y),
        None => "unchanged".to_string(),
    };
    let value = |v: Option<f64>| v.map_or_else(|| "unchanged".to_string(), |v| v.to_string());
    [offset, value(pose.scale), value(pose.opacity)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_slide_pose() {
        let [offset, scale, opacity] = describe_pose(&AnimationEffect::SlideInFromLeft.pose());
        assert_eq!(offset, "(-1w, 0h)");
        assert_eq!(scale, "0");
        assert_eq!(opacity, "0");
    }

    #[test]
    fn test_describe_partial_pose() {
        let [offset, scale, opacity] = describe_pose(&AnimationEffect::FadeIn.pose());
        assert_eq!(offset, "unchanged");
        assert_eq!(scale, "unchanged");
        assert_eq!(opacity, "0");
    }
}
