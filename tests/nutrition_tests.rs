use nutribot::nutrition::{
    calculate_bmr, calculate_nutrition, calculate_target_calories, calculate_tdee, ActivityLevel,
    Gender, Goal, NutritionResult, UserProfile, CALORIE_FLOOR,
};

fn profile(
    age: u32,
    gender: Gender,
    height: f64,
    weight: f64,
    activity: ActivityLevel,
    goal: Goal,
) -> UserProfile {
    UserProfile {
        age,
        gender,
        height,
        weight,
        activity,
        goal,
    }
}

#[test]
fn test_scenario_male_maintain() {
    let p = profile(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::Medium,
        Goal::Maintain,
    );

    assert_eq!(calculate_bmr(&p), 1780.0);
    assert_eq!(calculate_tdee(&p), 2759);
    assert_eq!(calculate_target_calories(&p), 2759);
    assert_eq!(
        calculate_nutrition(&p),
        NutritionResult {
            calories: 2759,
            protein: 207,
            carbs: 310,
            fats: 77,
        }
    );
}

#[test]
fn test_scenario_male_lose_fat() {
    let p = profile(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::Medium,
        Goal::LoseFat,
    );

    assert_eq!(calculate_target_calories(&p), 2259);
    assert_eq!(
        calculate_nutrition(&p),
        NutritionResult {
            calories: 2259,
            protein: 198,
            carbs: 226,
            fats: 63,
        }
    );
}

#[test]
fn test_scenario_floor_engaged() {
    let p = profile(
        90,
        Gender::Female,
        150.0,
        40.0,
        ActivityLevel::Low,
        Goal::LoseFat,
    );

    assert_eq!(calculate_tdee(&p), 872);
    assert_eq!(calculate_target_calories(&p), CALORIE_FLOOR);
    assert_eq!(calculate_nutrition(&p).calories, CALORIE_FLOOR);
}

#[test]
fn test_gain_muscle_split_favors_carbs() {
    let p = profile(
        25,
        Gender::Male,
        185.0,
        90.0,
        ActivityLevel::High,
        Goal::GainMuscle,
    );

    let result = calculate_nutrition(&p);
    // 30/20/50 split: carb calories dominate
    assert!(result.carbs * 4 > result.protein * 4);
    assert!(result.carbs * 4 > result.fats * 9);
}

#[test]
fn test_goal_ordering_ignoring_floor() {
    let base = profile(
        40,
        Gender::Female,
        165.0,
        70.0,
        ActivityLevel::Medium,
        Goal::Maintain,
    );

    let lose = calculate_target_calories(&UserProfile {
        goal: Goal::LoseFat,
        ..base
    });
    let maintain = calculate_target_calories(&base);
    let gain = calculate_target_calories(&UserProfile {
        goal: Goal::GainMuscle,
        ..base
    });

    assert!(lose < maintain);
    assert!(maintain < gain);
    assert_eq!(maintain - lose, 500);
    assert_eq!(gain - maintain, 300);
}

#[test]
fn test_result_serializes_with_expected_field_names() {
    let result = calculate_nutrition(&profile(
        30,
        Gender::Male,
        180.0,
        80.0,
        ActivityLevel::Medium,
        Goal::Maintain,
    ));

    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["calories"], 2759);
    assert_eq!(json["protein"], 207);
    assert_eq!(json["carbs"], 310);
    assert_eq!(json["fats"], 77);
}

#[test]
fn test_profile_deserializes_from_wire_format() {
    let p: UserProfile = serde_json::from_str(
        r#"{
            "age": 30,
            "gender": "male",
            "height": 180,
            "weight": 80,
            "activity": "medium",
            "goal": "maintain"
        }"#,
    )
    .unwrap();

    assert_eq!(p.gender, Gender::Male);
    assert_eq!(p.activity, ActivityLevel::Medium);
    assert_eq!(p.goal, Goal::Maintain);
}

#[test]
fn test_unknown_wire_values_are_rejected() {
    let result = serde_json::from_str::<UserProfile>(
        r#"{
            "age": 30,
            "gender": "male",
            "height": 180,
            "weight": 80,
            "activity": "extreme",
            "goal": "maintain"
        }"#,
    );

    assert!(result.is_err());
}
