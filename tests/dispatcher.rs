mod tests {
    use led_palette_controller::color::{BLACK, RAINBOW, Rgb};
    use led_palette_controller::{
        Animation, Command, CommandError, ContentType, ControllerConfig, OutputDriver,
        RenderContext, Request, StatusCode, VisualState, dispatch,
    };

    const LEDS: usize = 10;

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn setup() -> (RenderContext<LEDS>, RecordingDriver) {
        (
            RenderContext::new(&ControllerConfig::default()),
            RecordingDriver::default(),
        )
    }

    #[test]
    fn test_initial_state_is_black() {
        let (ctx, _) = setup();
        assert_eq!(ctx.state(), VisualState::Solid(BLACK));
        assert_eq!(ctx.frame().pixels(), &[BLACK; LEDS]);
    }

    #[test]
    fn test_set_color_fills_and_flushes() {
        let (mut ctx, mut driver) = setup();
        let response = dispatch(
            &mut ctx,
            &mut driver,
            &Request::parse("/color?red=255&green=0&blue=0"),
        );
        assert_eq!(response.status, StatusCode::Ok);
        assert_eq!(response.body, "Color updated");

        let red = Rgb::new(255, 0, 0);
        assert_eq!(ctx.state(), VisualState::Solid(red));
        assert_eq!(ctx.frame().pixels(), &[red; LEDS]);
        assert_eq!(driver.frames, vec![vec![red; LEDS]]);
    }

    #[test]
    fn test_set_color_for_valid_channels() {
        let (mut ctx, mut driver) = setup();
        for (r, g, b) in [(0u8, 0u8, 0u8), (1, 2, 3), (255, 255, 255), (17, 128, 254)] {
            let target = format!("/color?red={r}&green={g}&blue={b}");
            dispatch(&mut ctx, &mut driver, &Request::parse(&target));
            assert_eq!(ctx.state(), VisualState::Solid(Rgb::new(r, g, b)));
            assert!(ctx.frame().pixels().iter().all(|p| *p == Rgb::new(r, g, b)));
        }
    }

    #[test]
    fn test_set_color_clamps_out_of_range_values() {
        let (mut ctx, mut driver) = setup();
        let response = dispatch(
            &mut ctx,
            &mut driver,
            &Request::parse("/color?red=-5&green=300&blue=70000"),
        );
        assert!(response.is_success());
        assert_eq!(ctx.state(), VisualState::Solid(Rgb::new(0, 255, 255)));
    }

    #[test]
    fn test_set_color_is_idempotent() {
        let (mut once, mut driver) = setup();
        dispatch(&mut once, &mut driver, &Request::parse("/color?red=10&green=20&blue=30"));

        let (mut twice, mut driver) = setup();
        dispatch(&mut twice, &mut driver, &Request::parse("/color?red=10&green=20&blue=30"));
        dispatch(&mut twice, &mut driver, &Request::parse("/color?red=10&green=20&blue=30"));

        assert_eq!(once.frame(), twice.frame());
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_missing_color_parameters() {
        let (mut ctx, mut driver) = setup();
        dispatch(&mut ctx, &mut driver, &Request::parse("/color?red=1&green=2&blue=3"));
        let before = ctx.frame().clone();

        let response = dispatch(&mut ctx, &mut driver, &Request::parse("/color?green=10"));
        assert_eq!(response.status, StatusCode::BadRequest);
        assert_eq!(response.body, "Missing color parameters");
        assert_eq!(ctx.state(), VisualState::Solid(Rgb::new(1, 2, 3)));
        assert_eq!(ctx.frame(), &before);
        assert_eq!(driver.frames.len(), 1);
    }

    #[test]
    fn test_random_on_and_off() {
        let (mut ctx, mut driver) = setup();
        let response = dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=on"));
        assert_eq!(response.body, "Random palette enabled");
        assert_eq!(
            ctx.state(),
            VisualState::Animating(Animation {
                phase: 0,
                speed: 100
            })
        );

        assert!(ctx.advance_animation());
        let animated = ctx.frame().clone();

        let response = dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=off"));
        assert_eq!(response.body, "Random palette disabled");
        assert!(!ctx.state().is_animating());
        assert_eq!(ctx.frame(), &animated);
        assert!(!ctx.advance_animation());
        assert_eq!(ctx.frame(), &animated);
    }

    #[test]
    fn test_random_unknown_token_disables() {
        let (mut ctx, mut driver) = setup();
        dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=on"));
        let response = dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=ON"));
        assert!(response.is_success());
        assert_eq!(response.body, "Random palette disabled");
        assert!(!ctx.state().is_animating());
    }

    #[test]
    fn test_random_missing_state() {
        let (mut ctx, mut driver) = setup();
        let response = dispatch(&mut ctx, &mut driver, &Request::parse("/random"));
        assert_eq!(response.status, StatusCode::BadRequest);
        assert_eq!(response.body, "Missing state parameter");
        assert_eq!(ctx.state(), VisualState::Solid(BLACK));
    }

    #[test]
    fn test_animation_resumes_from_parked_phase() {
        let (mut ctx, mut driver) = setup();
        dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=on"));
        for _ in 0..5 {
            ctx.advance_animation();
        }
        dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=off"));
        dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=on"));
        let VisualState::Animating(animation) = ctx.state() else {
            panic!("expected animation");
        };
        assert_eq!(animation.phase, 5);

        // Enabling twice keeps the running phase
        dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=on"));
        assert_eq!(ctx.state(), VisualState::Animating(animation));
    }

    #[test]
    fn test_set_color_stops_animation() {
        let (mut ctx, mut driver) = setup();
        dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=on"));
        ctx.advance_animation();
        dispatch(&mut ctx, &mut driver, &Request::parse("/color?red=0&green=0&blue=9"));
        assert_eq!(ctx.state(), VisualState::Solid(Rgb::new(0, 0, 9)));
        assert!(!ctx.advance_animation());
    }

    #[test]
    fn test_advance_renders_palette_frame() {
        let (mut ctx, mut driver) = setup();
        dispatch(&mut ctx, &mut driver, &Request::parse("/random?state=on"));
        ctx.advance_animation();
        assert_eq!(ctx.frame().pixels()[0], RAINBOW.sample(1, 255));
        assert_eq!(ctx.frame().pixels()[1], RAINBOW.sample(4, 255));
    }

    #[test]
    fn test_control_panel_and_unknown_route() {
        let (mut ctx, mut driver) = setup();
        let page = dispatch(&mut ctx, &mut driver, &Request::parse("/"));
        assert!(page.is_success());
        assert_eq!(page.content_type, ContentType::Html);

        let missing = dispatch(&mut ctx, &mut driver, &Request::parse("/brightness?value=3"));
        assert_eq!(missing.status, StatusCode::NotFound);
        assert!(driver.frames.is_empty());
    }

    #[test]
    fn test_command_from_request() {
        assert_eq!(
            Command::from_request(&Request::parse("/color?blue=3&red=1&green=2")),
            Ok(Command::SetColor(Rgb::new(1, 2, 3)))
        );
        assert_eq!(
            Command::from_request(&Request::parse("/color?red=1&blue=3")),
            Err(CommandError::MissingColor)
        );
        assert_eq!(
            Command::from_request(&Request::parse("/random?state=on")),
            Ok(Command::SetAnimation(true))
        );
        assert_eq!(
            Command::from_request(&Request::parse("/random?state=maybe")),
            Ok(Command::SetAnimation(false))
        );
        assert_eq!(
            Command::from_request(&Request::parse("/nowhere")),
            Err(CommandError::UnknownRoute)
        );
        assert_eq!(CommandError::MissingState.to_string(), "missing state parameter");
    }
}
