use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::{AUTOPLAY_INTERVAL_MS, SWIPE_THRESHOLD_PX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    total: usize,
}

impl CarouselState {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves to `index`. One step past either end wraps to the other end.
    pub fn go_to(&mut self, index: isize) {
        if self.total == 0 {
            return;
        }
        let last = self.total - 1;
        self.current = match usize::try_from(index) {
            Err(_) => last,
            Ok(i) if i > last => 0,
            Ok(i) => i,
        };
    }

    pub fn next(&mut self) {
        self.go_to(self.current as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as isize - 1);
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    pub fn offset_percent(&self) -> usize {
        self.current * 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<Swipe> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if diff > 0.0 { Swipe::Next } else { Swipe::Prev })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: AttrValue,
    pub caption: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

pub enum CarouselMsg {
    Next,
    Prev,
    GoTo(usize),
    Tick,
    TouchStart(f64),
    TouchEnd(f64),
    Pause,
    Resume,
}

/// Phone-mockup carousel with autoplay. At most one autoplay interval is alive;
/// restarting drops (and so cancels) the previous one.
pub struct Carousel {
    state: CarouselState,
    autoplay: Option<Interval>,
    touch_start_x: f64,
}

impl Carousel {
    fn start_autoplay(&mut self, ctx: &Context<Self>) {
        self.stop_autoplay();
        if self.state.total == 0 {
            return;
        }
        let link = ctx.link().clone();
        self.autoplay = Some(Interval::new(AUTOPLAY_INTERVAL_MS, move || {
            link.send_message(CarouselMsg::Tick)
        }));
    }

    fn stop_autoplay(&mut self) {
        self.autoplay = None;
    }
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
}

impl Component for Carousel {
    type Message = CarouselMsg;
    type Properties = CarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: CarouselState::new(ctx.props().slides.len()),
            autoplay: None,
            touch_start_x: 0.0,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.start_autoplay(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state = CarouselState::new(ctx.props().slides.len());
        self.start_autoplay(ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CarouselMsg::Tick => self.state.next(),
            CarouselMsg::Next => {
                self.state.next();
                self.start_autoplay(ctx);
            }
            CarouselMsg::Prev => {
                self.state.prev();
                self.start_autoplay(ctx);
            }
            CarouselMsg::GoTo(index) => {
                self.state.go_to(index as isize);
                self.start_autoplay(ctx);
            }
            CarouselMsg::TouchStart(x) => {
                self.touch_start_x = x;
                self.stop_autoplay();
                return false;
            }
            CarouselMsg::TouchEnd(x) => {
                match swipe_direction(self.touch_start_x, x) {
                    Some(Swipe::Next) => self.state.next(),
                    Some(Swipe::Prev) => self.state.prev(),
                    None => {}
                }
                self.start_autoplay(ctx);
            }
            CarouselMsg::Pause => {
                self.stop_autoplay();
                return false;
            }
            CarouselMsg::Resume => {
                self.start_autoplay(ctx);
                return false;
            }
        }
        debug!("Carousel at slide {}", self.state.current());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let slides = &ctx.props().slides;
        if slides.is_empty() {
            return html! {};
        }

        let link = ctx.link();
        let ontouchstart = link.batch_callback(|e: TouchEvent| first_touch_x(&e).map(CarouselMsg::TouchStart));
        let ontouchend = link.batch_callback(|e: TouchEvent| first_touch_x(&e).map(CarouselMsg::TouchEnd));
        let track_style = format!("transform: translateX(-{}%);", self.state.offset_percent());

        html! {
            <div
                class="phone-mockup"
                onmouseenter={link.callback(|_| CarouselMsg::Pause)}
                onmouseleave={link.callback(|_| CarouselMsg::Resume)}
            >
                <div class="carousel" {ontouchstart} {ontouchend}>
                    <div class="carousel-slides" style={track_style}>
                        { for slides.iter().map(|slide| html! {
                            <div class="carousel-slide">
                                <h4>{slide.title.clone()}</h4>
                                <p>{slide.caption.clone()}</p>
                            </div>
                        }) }
                    </div>
                    <button class="carousel-prev" aria-label="Previous slide" onclick={link.callback(|_| CarouselMsg::Prev)}>
                        {"‹"}
                    </button>
                    <button class="carousel-next" aria-label="Next slide" onclick={link.callback(|_| CarouselMsg::Next)}>
                        {"›"}
                    </button>
                </div>
                <div class="carousel-dots">
                    { for (0..slides.len()).map(|i| html! {
                        <button
                            class={classes!("carousel-dot", (i == self.state.current()).then(|| "active"))}
                            aria-label={format!("Go to slide {}", i + 1)}
                            onclick={link.callback(move |_| CarouselMsg::GoTo(i))}
                        />
                    }) }
                </div>
            </div>
        }
    }
}
