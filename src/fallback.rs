//! Static content used whenever live headlines are unavailable.

use crate::clock::Clock;
use crate::models::{Article, NewsBundle};

/// Tip attached to live bundles.
pub const LIVE_TIP: &str =
    "نصيحة اليوم: المشي لمدة 30 دقيقة يومياً يقلل من خطر الإصابة بأمراض القلب.";

/// Tip attached to fallback bundles.
pub const FALLBACK_TIP: &str = "نصيحة اليوم: شرب الماء بانتظام يساعد على تحسين التركيز والطاقة.";

/// Build the fallback bundle: [`FALLBACK_TIP`] and two fixed articles.
///
/// Only `updated_at` varies between calls.
pub fn generate_fallback_data(clock: &impl Clock) -> NewsBundle {
    NewsBundle::new(clock.timestamp(), FALLBACK_TIP, fallback_articles())
}

fn fallback_articles() -> Vec<Article> {
    vec![
        Article::new(
            "فوائد الصيام المتقطع للصحة العقلية",
            "دراسات جديدة تؤكد دور الصيام في تحسين الوظائف الإدراكية.",
            "#",
            "https://via.placeholder.com/300?text=Health",
        ),
        Article::new(
            "أهمية النوم الجيد للمناعة",
            "النوم لمدة 7-8 ساعات يعزز جهاز المناعة بشكل كبير.",
            "#",
            "https://via.placeholder.com/300?text=Sleep",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn clock(hour: u32) -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2025, 5, 6)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_fallback_content() {
        let bundle = generate_fallback_data(&clock(8));
        assert_eq!(bundle.updated_at, "2025-05-06T08:00:00.000000");
        assert_eq!(bundle.tip, FALLBACK_TIP);
        assert_eq!(bundle.articles.len(), 2);
        assert_eq!(
            bundle.articles[0].title(),
            Some("فوائد الصيام المتقطع للصحة العقلية")
        );
        assert_eq!(
            bundle.articles[1].title(),
            Some("أهمية النوم الجيد للمناعة")
        );
        assert!(bundle.articles.iter().all(|a| a.url() == Some("#")));
        assert!(bundle.articles.iter().all(|a| a.0.len() == 4));
    }

    #[test]
    fn test_fallback_differs_only_in_timestamp() {
        let morning = generate_fallback_data(&clock(8));
        let evening = generate_fallback_data(&clock(20));
        assert_ne!(morning.updated_at, evening.updated_at);
        assert_eq!(morning.tip, evening.tip);
        assert_eq!(morning.articles, evening.articles);
    }
}
